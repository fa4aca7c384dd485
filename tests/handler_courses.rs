mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

// ─── POST (add course) ───────────────────────────────────────────────────────

#[sqlx::test]
async fn test_add_course_title_only(pool: PgPool) {
    let bootcamp_id = common::create_test_bootcamp(&pool, "Devworks").await;

    let server = common::make_server(pool);
    let response = server
        .post(&format!("/api/v1/bootcamps/{bootcamp_id}/courses"))
        .json(&json!({ "title": "Node Basics" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["title"], "Node Basics");
    assert_eq!(body["data"]["bootcamp"], bootcamp_id);
    assert!(body["data"]["id"].is_i64());
}

#[sqlx::test]
async fn test_add_course_unknown_bootcamp_creates_nothing(pool: PgPool) {
    let pool_probe = pool.clone();

    let server = common::make_server(pool);
    let response = server
        .post("/api/v1/bootcamps/999999/courses")
        .json(&json!({ "title": "Ghost Course" }))
        .await;

    response.assert_status_not_found();

    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Bootcamp not found with id of 999999");

    // The store is untouched.
    assert_eq!(common::count_courses(&pool_probe).await, 0);
}

#[sqlx::test]
async fn test_add_course_invalid_skill_level(pool: PgPool) {
    let bootcamp_id = common::create_test_bootcamp(&pool, "Devworks").await;

    let server = common::make_server(pool);
    let response = server
        .post(&format!("/api/v1/bootcamps/{bootcamp_id}/courses"))
        .json(&json!({ "title": "Node Basics", "minimum_skill": "wizard" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_course_not_found(pool: PgPool) {
    let server = common::make_server(pool);
    let response = server.get("/api/v1/courses/999999").await;

    response.assert_status_not_found();

    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Course not found with id of 999999");
}

#[sqlx::test]
async fn test_get_course_malformed_id(pool: PgPool) {
    let server = common::make_server(pool);
    let response = server.get("/api/v1/courses/not-an-id").await;

    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["error"], "Invalid course id of not-an-id");
}

#[sqlx::test]
async fn test_course_round_trip(pool: PgPool) {
    let bootcamp_id = common::create_test_bootcamp(&pool, "Devworks").await;

    let server = common::make_server(pool);
    let created = server
        .post(&format!("/api/v1/bootcamps/{bootcamp_id}/courses"))
        .json(&json!({
            "title": "Full Stack Web Development",
            "description": "Front to back",
            "weeks": 12,
            "tuition": 10000,
            "minimum_skill": "intermediate"
        }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let id = created.json::<Value>()["data"]["id"].as_i64().unwrap();

    let fetched = server.get(&format!("/api/v1/courses/{id}")).await;
    fetched.assert_status_ok();

    let body = fetched.json::<Value>();
    assert_eq!(body["data"]["title"], "Full Stack Web Development");
    assert_eq!(body["data"]["description"], "Front to back");
    assert_eq!(body["data"]["weeks"], 12);
    assert_eq!(body["data"]["tuition"], 10000);
    assert_eq!(body["data"]["minimum_skill"], "intermediate");
    assert_eq!(body["data"]["bootcamp"], bootcamp_id);
}

// ─── GET (lists) ─────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_scoped_list_filters_by_bootcamp(pool: PgPool) {
    let first = common::create_test_bootcamp(&pool, "Devworks").await;
    let second = common::create_test_bootcamp(&pool, "ModernTech").await;
    common::create_test_course(&pool, "Node Basics", first).await;
    common::create_test_course(&pool, "React Basics", first).await;
    common::create_test_course(&pool, "UI/UX", second).await;

    let server = common::make_server(pool);

    let scoped = server
        .get(&format!("/api/v1/bootcamps/{first}/courses"))
        .await;
    scoped.assert_status_ok();

    let body = scoped.json::<Value>();
    assert_eq!(body["count"], 2);
    for course in body["data"].as_array().unwrap() {
        assert_eq!(course["bootcamp"], first);
    }

    let all = server.get("/api/v1/courses").await;
    all.assert_status_ok();
    assert_eq!(all.json::<Value>()["count"], 3);
}

#[sqlx::test]
async fn test_scoped_list_unknown_bootcamp_is_empty(pool: PgPool) {
    let server = common::make_server(pool);
    let response = server.get("/api/v1/bootcamps/999999/courses").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 0);
}

// ─── PUT (update) ────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_course_partial(pool: PgPool) {
    let bootcamp_id = common::create_test_bootcamp(&pool, "Devworks").await;
    let id = common::create_test_course(&pool, "Node Basics", bootcamp_id).await;

    let server = common::make_server(pool);
    let response = server
        .put(&format!("/api/v1/courses/{id}"))
        .json(&json!({ "tuition": 13000 }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["data"]["tuition"], 13000);
    assert_eq!(body["data"]["title"], "Node Basics");
}

#[sqlx::test]
async fn test_update_course_not_found(pool: PgPool) {
    let server = common::make_server(pool);
    let response = server
        .put("/api/v1/courses/999999")
        .json(&json!({ "tuition": 13000 }))
        .await;

    response.assert_status_not_found();

    let body = response.json::<Value>();
    assert_eq!(body["error"], "Course not found with id of 999999");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_course(pool: PgPool) {
    let bootcamp_id = common::create_test_bootcamp(&pool, "Devworks").await;
    let id = common::create_test_course(&pool, "Node Basics", bootcamp_id).await;

    let server = common::make_server(pool);
    let response = server.delete(&format!("/api/v1/courses/{id}")).await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!({}));
}

#[sqlx::test]
async fn test_delete_course_twice_returns_not_found(pool: PgPool) {
    let bootcamp_id = common::create_test_bootcamp(&pool, "Devworks").await;
    let id = common::create_test_course(&pool, "Node Basics", bootcamp_id).await;

    let server = common::make_server(pool);

    server
        .delete(&format!("/api/v1/courses/{id}"))
        .await
        .assert_status_ok();

    server
        .delete(&format!("/api/v1/courses/{id}"))
        .await
        .assert_status_not_found();
}
