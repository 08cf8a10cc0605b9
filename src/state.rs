//! Shared application state.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, StatsService, UrlService};
use crate::infrastructure::persistence::{PgAccessLogRepository, PgUrlRepository};

/// Application state injected into every handler.
///
/// Owns the connection pool and the service layer; constructed once at
/// startup (or per test) and cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub url_service: Arc<UrlService<PgUrlRepository, PgAccessLogRepository>>,
    pub stats_service: Arc<StatsService<PgUrlRepository, PgAccessLogRepository>>,
    pub auth_service: Arc<AuthService>,
    /// Public base URL without a trailing slash.
    pub base_url: String,
}

impl AppState {
    /// Wires repositories and services around a connection pool.
    pub fn new(db: Arc<PgPool>, base_url: &str, api_key: &str) -> Self {
        let urls = Arc::new(PgUrlRepository::new(db.clone()));
        let access_logs = Arc::new(PgAccessLogRepository::new(db.clone()));

        Self {
            url_service: Arc::new(UrlService::new(urls.clone(), access_logs.clone())),
            stats_service: Arc::new(StatsService::new(urls, access_logs)),
            auth_service: Arc::new(AuthService::new(api_key)),
            base_url: base_url.trim_end_matches('/').to_string(),
            db,
        }
    }

    /// Composes the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
