#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;

use bootcamp_api::api::routes::api_routes;
use bootcamp_api::state::AppState;

/// Builds a test server exposing the versioned API over a fresh database.
pub fn make_server(pool: PgPool) -> TestServer {
    let state = AppState::new(Arc::new(pool));
    let app = Router::new().nest("/api/v1", api_routes()).with_state(state);
    TestServer::new(app).unwrap()
}

pub async fn create_test_bootcamp(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO bootcamps (name, description) VALUES ($1, 'A test bootcamp') RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_course(pool: &PgPool, title: &str, bootcamp_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO courses (title, bootcamp_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(title)
    .bind(bootcamp_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_courses(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
        .fetch_one(pool)
        .await
        .unwrap()
}
