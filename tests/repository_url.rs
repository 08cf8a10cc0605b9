mod common;

use sqlx::PgPool;
use std::sync::Arc;

use linkcut::domain::entities::NewShortUrl;
use linkcut::domain::repositories::UrlRepository;
use linkcut::error::AppError;
use linkcut::infrastructure::persistence::PgUrlRepository;

fn repo(pool: &PgPool) -> PgUrlRepository {
    PgUrlRepository::new(Arc::new(pool.clone()))
}

#[sqlx::test]
async fn test_insert_returns_persisted_row(pool: PgPool) {
    let repo = repo(&pool);

    let url = repo
        .insert(NewShortUrl {
            original_url: "https://example.com/page".to_string(),
            short_code: "abc123".to_string(),
            expires_at: None,
        })
        .await
        .unwrap();

    assert!(url.id > 0);
    assert_eq!(url.short_code, "abc123");
    assert_eq!(url.access_count, 0);
    assert!(url.expires_at.is_none());
}

#[sqlx::test]
async fn test_insert_duplicate_code_is_conflict(pool: PgPool) {
    let repo = repo(&pool);

    let new_url = NewShortUrl {
        original_url: "https://example.com".to_string(),
        short_code: "dup123".to_string(),
        expires_at: None,
    };

    repo.insert(new_url.clone()).await.unwrap();
    let result = repo.insert(new_url).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_find_by_code(pool: PgPool) {
    common::create_test_url(&pool, "abc123", "https://example.com").await;

    let repo = repo(&pool);

    let found = repo.find_by_code("abc123").await.unwrap();
    assert_eq!(found.unwrap().original_url, "https://example.com");

    let missing = repo.find_by_code("miss42").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_find_by_original_url(pool: PgPool) {
    common::create_test_url(&pool, "abc123", "https://example.com/page").await;

    let repo = repo(&pool);

    let found = repo
        .find_by_original_url("https://example.com/page")
        .await
        .unwrap();
    assert_eq!(found.unwrap().short_code, "abc123");

    let missing = repo
        .find_by_original_url("https://example.com/other")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_code_exists(pool: PgPool) {
    common::create_test_url(&pool, "abc123", "https://example.com").await;

    let repo = repo(&pool);

    assert!(repo.code_exists("abc123").await.unwrap());
    assert!(!repo.code_exists("miss42").await.unwrap());
}

#[sqlx::test]
async fn test_update_original_url_refreshes_timestamp(pool: PgPool) {
    common::create_test_url(&pool, "abc123", "https://old.example.com").await;

    let repo = repo(&pool);

    let updated = repo
        .update_original_url("abc123", "https://new.example.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.original_url, "https://new.example.com");
    assert!(updated.updated_at >= updated.created_at);

    let missing = repo
        .update_original_url("miss42", "https://new.example.com")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_delete_removes_row_and_logs(pool: PgPool) {
    let url_id = common::create_test_url(&pool, "abc123", "https://example.com").await;
    common::insert_access_log(&pool, url_id, "10.0.0.1").await;

    let repo = repo(&pool);

    assert!(repo.delete("abc123").await.unwrap());
    assert!(!repo.delete("abc123").await.unwrap());

    assert!(common::original_url_of(&pool, "abc123").await.is_none());
    assert_eq!(common::access_log_count(&pool, url_id).await, 0);
}

#[sqlx::test]
async fn test_concurrent_increments_lose_no_updates(pool: PgPool) {
    let url_id = common::create_test_url(&pool, "count1", "https://example.com").await;

    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));

    let mut handles = Vec::new();
    for _ in 0..25 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.increment_access_count(url_id).await.unwrap();
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(common::access_count(&pool, "count1").await, 25);
}
