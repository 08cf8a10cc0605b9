//! Repository trait for redirect access logs.

use crate::domain::entities::{AccessLog, NewAccess};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recording and querying redirect events.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAccessLogRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessLogRepository: Send + Sync {
    /// Records a redirect event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// dangling `url_id`.
    async fn record(&self, access: NewAccess) -> Result<(), AppError>;

    /// Lists all recorded events for a URL, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_url(&self, url_id: i64) -> Result<Vec<AccessLog>, AppError>;
}
