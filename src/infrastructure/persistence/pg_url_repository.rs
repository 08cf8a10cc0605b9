//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;

const URL_COLUMNS: &str =
    "id, original_url, short_code, access_count, created_at, updated_at, expires_at";

/// PostgreSQL repository for short URL storage and retrieval.
///
/// Uses bound parameters for SQL injection protection.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let sql = format!(
            "INSERT INTO urls (original_url, short_code, expires_at) \
             VALUES ($1, $2, $3) \
             RETURNING {URL_COLUMNS}"
        );

        sqlx::query_as::<_, ShortUrl>(&sql)
            .bind(&new_url.original_url)
            .bind(&new_url.short_code)
            .bind(new_url.expires_at)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| {
                // The unique constraint is the authoritative guard against
                // writers racing the pre-insert existence check.
                if is_unique_violation_on_code(&e) {
                    AppError::conflict(
                        "Custom code already in use",
                        json!({ "code": new_url.short_code }),
                    )
                } else {
                    e.into()
                }
            })
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let sql = format!("SELECT {URL_COLUMNS} FROM urls WHERE short_code = $1");

        let row = sqlx::query_as::<_, ShortUrl>(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row)
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<ShortUrl>, AppError> {
        let sql = format!(
            "SELECT {URL_COLUMNS} FROM urls \
             WHERE original_url = $1 \
             ORDER BY id \
             LIMIT 1"
        );

        let row = sqlx::query_as::<_, ShortUrl>(&sql)
            .bind(original_url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row)
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM urls WHERE short_code = $1)")
                .bind(code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn update_original_url(
        &self,
        code: &str,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError> {
        let sql = format!(
            "UPDATE urls \
             SET original_url = $2, updated_at = NOW() \
             WHERE short_code = $1 \
             RETURNING {URL_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ShortUrl>(&sql)
            .bind(code)
            .bind(original_url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE short_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_access_count(&self, id: i64) -> Result<(), AppError> {
        // Atomic increment expression; concurrent redirects must not lose updates.
        sqlx::query("UPDATE urls SET access_count = access_count + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
