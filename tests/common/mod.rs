#![allow(dead_code)]

use linkcut::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_BASE_URL: &str = "http://localhost:3000";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), TEST_BASE_URL, TEST_API_KEY)
}

pub async fn create_test_url(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO urls (original_url, short_code) VALUES ($1, $2) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_expired_url(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO urls (original_url, short_code, expires_at) \
         VALUES ($1, $2, NOW() - INTERVAL '1 hour') RETURNING id",
    )
    .bind(url)
    .bind(code)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_access_log(pool: &PgPool, url_id: i64, ip: &str) {
    sqlx::query("INSERT INTO access_logs (url_id, ip_address) VALUES ($1, $2)")
        .bind(url_id)
        .bind(ip)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn access_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT access_count FROM urls WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn access_log_count(pool: &PgPool, url_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM access_logs WHERE url_id = $1")
        .bind(url_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn original_url_of(pool: &PgPool, code: &str) -> Option<String> {
    sqlx::query_scalar::<_, String>("SELECT original_url FROM urls WHERE short_code = $1")
        .bind(code)
        .fetch_optional(pool)
        .await
        .unwrap()
}
