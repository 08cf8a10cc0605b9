mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;

use linkcut::api::handlers::stats_handler;

fn stats_app(pool: PgPool) -> Router {
    Router::new()
        .route("/shorten/{code}/stats", get(stats_handler))
        .with_state(common::create_test_state(pool))
}

#[sqlx::test]
async fn test_stats_success(pool: PgPool) {
    let url_id = common::create_test_url(&pool, "abc123", "https://example.com").await;
    common::insert_access_log(&pool, url_id, "10.0.0.1").await;
    common::insert_access_log(&pool, url_id, "10.0.0.2").await;

    let server = TestServer::new(stats_app(pool)).unwrap();

    let response = server.get("/shorten/abc123/stats").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["shortCode"], "abc123");
    assert_eq!(body["accessCount"], 0);

    let logs = body["accessLogs"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["ipAddress"], "10.0.0.1");
    assert_eq!(logs[1]["ipAddress"], "10.0.0.2");
    assert!(logs[0]["accessedAt"].is_string());
}

#[sqlx::test]
async fn test_stats_empty_history(pool: PgPool) {
    common::create_test_url(&pool, "quiet1", "https://example.com").await;

    let server = TestServer::new(stats_app(pool)).unwrap();

    let response = server.get("/shorten/quiet1/stats").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["accessLogs"].as_array().unwrap().len(), 0);
}

#[sqlx::test]
async fn test_stats_not_found(pool: PgPool) {
    let server = TestServer::new(stats_app(pool)).unwrap();

    let response = server.get("/shorten/miss42/stats").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_stats_rejects_bad_code_format(pool: PgPool) {
    let server = TestServer::new(stats_app(pool)).unwrap();

    let response = server.get("/shorten/ab/stats").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
