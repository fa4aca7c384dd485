mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

// ─── GET (list) ──────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_bootcamps_empty(pool: PgPool) {
    let server = common::make_server(pool);
    let response = server.get("/api/v1/bootcamps").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 0);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[sqlx::test]
async fn test_list_bootcamps_counts_rows(pool: PgPool) {
    common::create_test_bootcamp(&pool, "Devworks").await;
    common::create_test_bootcamp(&pool, "ModernTech").await;

    let server = common::make_server(pool);
    let response = server.get("/api/v1/bootcamps").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

// ─── GET (one) ───────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_bootcamp_not_found(pool: PgPool) {
    let server = common::make_server(pool);
    let response = server.get("/api/v1/bootcamps/999999").await;

    response.assert_status_not_found();

    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Bootcamp not found with id of 999999");
}

#[sqlx::test]
async fn test_get_bootcamp_malformed_id(pool: PgPool) {
    let server = common::make_server(pool);
    let response = server.get("/api/v1/bootcamps/abc").await;

    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid bootcamp id of abc");
}

// ─── POST (create) ───────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_bootcamp_round_trip(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/v1/bootcamps")
        .json(&json!({
            "name": "Devworks Bootcamp",
            "description": "Full stack web development",
            "website": "https://devworks.com",
            "careers": ["Web Development", "UI/UX"],
            "housing": true
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    let id = body["data"]["id"].as_i64().unwrap();

    // Created entity round-trips all client-supplied fields.
    let fetched = server.get(&format!("/api/v1/bootcamps/{id}")).await;
    fetched.assert_status_ok();

    let fetched = fetched.json::<Value>();
    assert_eq!(fetched["data"]["name"], "Devworks Bootcamp");
    assert_eq!(fetched["data"]["description"], "Full stack web development");
    assert_eq!(fetched["data"]["website"], "https://devworks.com");
    assert_eq!(fetched["data"]["careers"], json!(["Web Development", "UI/UX"]));
    assert_eq!(fetched["data"]["housing"], true);
}

#[sqlx::test]
async fn test_create_bootcamp_missing_fields(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/v1/bootcamps")
        .json(&json!({ "name": "", "description": "" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Please add a name"));
    assert!(message.contains("Please add a description"));
}

#[sqlx::test]
async fn test_create_bootcamp_duplicate_name(pool: PgPool) {
    common::create_test_bootcamp(&pool, "Devworks").await;

    let server = common::make_server(pool);
    let response = server
        .post("/api/v1/bootcamps")
        .json(&json!({ "name": "Devworks", "description": "Another one" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Duplicate field value entered");
}

// ─── PUT (update) ────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_bootcamp_partial(pool: PgPool) {
    let id = common::create_test_bootcamp(&pool, "Devworks").await;

    let server = common::make_server(pool);
    let response = server
        .put(&format!("/api/v1/bootcamps/{id}"))
        .json(&json!({ "housing": true }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["housing"], true);
    // Untouched fields survive the partial update.
    assert_eq!(body["data"]["name"], "Devworks");
}

#[sqlx::test]
async fn test_update_bootcamp_not_found(pool: PgPool) {
    let server = common::make_server(pool);
    let response = server
        .put("/api/v1/bootcamps/999999")
        .json(&json!({ "name": "Ghost" }))
        .await;

    response.assert_status_not_found();

    let body = response.json::<Value>();
    assert_eq!(body["error"], "Bootcamp not found with id of 999999");
}

#[sqlx::test]
async fn test_update_bootcamp_validation_rerun(pool: PgPool) {
    let id = common::create_test_bootcamp(&pool, "Devworks").await;

    let server = common::make_server(pool);
    let response = server
        .put(&format!("/api/v1/bootcamps/{id}"))
        .json(&json!({ "email": "not-an-email" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_bootcamp(pool: PgPool) {
    let id = common::create_test_bootcamp(&pool, "Devworks").await;

    let server = common::make_server(pool);
    let response = server.delete(&format!("/api/v1/bootcamps/{id}")).await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!({}));
}

#[sqlx::test]
async fn test_delete_bootcamp_twice_returns_not_found(pool: PgPool) {
    let id = common::create_test_bootcamp(&pool, "Devworks").await;

    let server = common::make_server(pool);

    server
        .delete(&format!("/api/v1/bootcamps/{id}"))
        .await
        .assert_status_ok();

    let second = server.delete(&format!("/api/v1/bootcamps/{id}")).await;
    second.assert_status_not_found();

    let body = second.json::<Value>();
    assert_eq!(body["success"], false);
}

#[sqlx::test]
async fn test_delete_bootcamp_cascades_courses(pool: PgPool) {
    let id = common::create_test_bootcamp(&pool, "Devworks").await;
    common::create_test_course(&pool, "Node Basics", id).await;
    let pool_probe = pool.clone();

    let server = common::make_server(pool);
    server
        .delete(&format!("/api/v1/bootcamps/{id}"))
        .await
        .assert_status_ok();

    assert_eq!(common::count_courses(&pool_probe).await, 0);
}
