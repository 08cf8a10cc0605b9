//! Access statistics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{AccessLog, ShortUrl};
use crate::domain::repositories::{AccessLogRepository, UrlRepository};
use crate::error::AppError;

/// A record together with its full, ordered access history.
#[derive(Debug, Clone)]
pub struct UrlStats {
    pub url: ShortUrl,
    pub accesses: Vec<AccessLog>,
}

/// Service for retrieving per-URL access statistics.
pub struct StatsService<U: UrlRepository, A: AccessLogRepository> {
    urls: Arc<U>,
    access_logs: Arc<A>,
}

impl<U: UrlRepository, A: AccessLogRepository> StatsService<U, A> {
    /// Creates a new statistics service.
    pub fn new(urls: Arc<U>, access_logs: Arc<A>) -> Self {
        Self { urls, access_logs }
    }

    /// Returns the record and every access-log entry for `code`, oldest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    pub async fn get_stats(&self, code: &str) -> Result<UrlStats, AppError> {
        let url = self.urls.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("Short URL not found", json!({ "code": code }))
        })?;

        let accesses = self.access_logs.list_by_url(url.id).await?;

        Ok(UrlStats { url, accesses })
    }
}
