//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Uniqueness
///
/// The `short_code` column carries a database unique constraint; [`Self::insert`]
/// is the authoritative guard against concurrent writers racing the
/// [`Self::code_exists`] pre-check.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new short URL and returns the persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a record by its exact original URL.
    ///
    /// Used for deduplication at creation time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Returns whether a short code is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;

    /// Replaces `original_url` and refreshes `updated_at`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` with the updated record
    /// - `Ok(None)` if no record matches the code
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_original_url(
        &self,
        code: &str,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError>;

    /// Deletes a record by its short code.
    ///
    /// Access logs referencing the record are removed by the cascade on the
    /// foreign key. Returns `Ok(true)` if a record was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Increments the access counter by one.
    ///
    /// Uses an atomic SQL increment expression; concurrent calls must not
    /// lose updates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_access_count(&self, id: i64) -> Result<(), AppError>;
}
