//! PostgreSQL implementation of the access log repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{AccessLog, NewAccess};
use crate::domain::repositories::AccessLogRepository;
use crate::error::AppError;

/// PostgreSQL repository for redirect access logs.
pub struct PgAccessLogRepository {
    pool: Arc<PgPool>,
}

impl PgAccessLogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessLogRepository for PgAccessLogRepository {
    async fn record(&self, access: NewAccess) -> Result<(), AppError> {
        sqlx::query("INSERT INTO access_logs (url_id, ip_address) VALUES ($1, $2)")
            .bind(access.url_id)
            .bind(&access.ip_address)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn list_by_url(&self, url_id: i64) -> Result<Vec<AccessLog>, AppError> {
        let rows = sqlx::query_as::<_, AccessLog>(
            "SELECT id, url_id, accessed_at, ip_address \
             FROM access_logs \
             WHERE url_id = $1 \
             ORDER BY accessed_at, id",
        )
        .bind(url_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
