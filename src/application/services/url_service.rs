//! Short URL creation, lookup, update, delete, and redirect resolution.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;

use crate::domain::entities::{NewAccess, NewShortUrl, ShortUrl};
use crate::domain::repositories::{AccessLogRepository, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::{
    DEFAULT_CODE_LENGTH, GeneratedCode, generate_unique_code, validate_custom_code,
};
use crate::utils::url_validator::validate_url;

/// Result of a create operation, distinguishing a fresh insert from a
/// deduplicated hit on an existing record.
#[derive(Debug, Clone)]
pub struct CreateOutcome {
    pub url: ShortUrl,
    /// `false` when an existing record for the same URL was returned.
    pub created: bool,
}

/// Service for managing short URLs.
///
/// Handles URL validation, code generation/validation, deduplication, and
/// the redirect side effects (access logging and counter increments).
pub struct UrlService<U: UrlRepository, A: AccessLogRepository> {
    urls: Arc<U>,
    access_logs: Arc<A>,
}

impl<U: UrlRepository, A: AccessLogRepository> UrlService<U, A> {
    /// Creates a new URL service.
    pub fn new(urls: Arc<U>, access_logs: Arc<A>) -> Self {
        Self { urls, access_logs }
    }

    /// Creates a short URL, or returns the existing record for a duplicate.
    ///
    /// # Deduplication
    ///
    /// If the exact URL has been shortened before, the existing record is
    /// returned with `created = false` and no insert happens — at most one
    /// record per original URL.
    ///
    /// # Code Selection
    ///
    /// - A custom code is validated (4-10 alphanumeric) and must be free;
    ///   a taken code is a conflict.
    /// - Otherwise a random 6-character code is generated with up to 10
    ///   uniqueness-check attempts.
    ///
    /// The pre-insert existence checks race concurrent writers; the
    /// database unique constraint decides, and a losing insert surfaces
    /// as [`AppError::Conflict`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL, custom code,
    /// or expiry; [`AppError::Conflict`] for a taken custom code;
    /// [`AppError::Internal`] when generation attempts are exhausted or on
    /// database errors.
    pub async fn create_short_url(
        &self,
        original_url: String,
        custom_code: Option<String>,
        expires_in_days: Option<i64>,
    ) -> Result<CreateOutcome, AppError> {
        validate_url(&original_url).map_err(|e| {
            AppError::bad_request(
                "A valid URL is required (e.g., https://example.com)",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let expires_at = match expires_in_days {
            Some(days) if days > 0 => Some(Utc::now() + Duration::days(days)),
            Some(days) => {
                return Err(AppError::bad_request(
                    "Expiration must be a positive number of days",
                    json!({ "expires_in_days": days }),
                ));
            }
            None => None,
        };

        if let Some(existing) = self.urls.find_by_original_url(&original_url).await? {
            return Ok(CreateOutcome {
                url: existing,
                created: false,
            });
        }

        let short_code = if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;

            if self.urls.code_exists(&custom).await? {
                return Err(AppError::conflict(
                    "Custom code already in use",
                    json!({ "code": custom }),
                ));
            }

            custom
        } else {
            self.generate_code().await?
        };

        let url = self
            .urls
            .insert(NewShortUrl {
                original_url,
                short_code,
                expires_at,
            })
            .await?;

        Ok(CreateOutcome { url, created: true })
    }

    /// Retrieves a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    pub async fn get_by_code(&self, code: &str) -> Result<ShortUrl, AppError> {
        self.urls.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("Short URL not found", json!({ "code": code }))
        })
    }

    /// Resolves a redirect: looks up the code, rejects expired records, and
    /// applies both side effects — an access-log entry and an atomic counter
    /// increment — before returning the destination.
    ///
    /// The two side effects are separate statements, not a transaction;
    /// both must apply on any successful redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code and
    /// [`AppError::Gone`] for an expired one; neither records any side
    /// effect.
    pub async fn resolve_redirect(&self, code: &str, ip: &str) -> Result<String, AppError> {
        let url = self.get_by_code(code).await?;

        if url.is_expired() {
            return Err(AppError::gone(
                "Short URL has expired",
                json!({ "code": code }),
            ));
        }

        self.access_logs
            .record(NewAccess {
                url_id: url.id,
                ip_address: ip.to_string(),
            })
            .await?;

        self.urls.increment_access_count(url.id).await?;

        Ok(url.original_url)
    }

    /// Replaces the destination URL of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL and
    /// [`AppError::NotFound`] for an unknown code.
    pub async fn update_original_url(
        &self,
        code: &str,
        original_url: &str,
    ) -> Result<ShortUrl, AppError> {
        validate_url(original_url).map_err(|e| {
            AppError::bad_request(
                "A valid URL is required (e.g., https://example.com)",
                json!({ "reason": e.to_string() }),
            )
        })?;

        self.urls
            .update_original_url(code, original_url)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))
    }

    /// Deletes a record; its access logs go with it via the cascade.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        let deleted = self.urls.delete(code).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "code": code }),
            ));
        }

        Ok(())
    }

    /// Generates a unique short code with bounded retry.
    async fn generate_code(&self) -> Result<String, AppError> {
        let urls = Arc::clone(&self.urls);

        let outcome = generate_unique_code(DEFAULT_CODE_LENGTH, move |code| {
            let urls = Arc::clone(&urls);
            async move { urls.code_exists(&code).await }
        })
        .await?;

        match outcome {
            GeneratedCode::Unique(code) => Ok(code),
            GeneratedCode::Exhausted { attempts } => Err(AppError::internal(
                "Failed to generate a unique short code",
                json!({ "attempts": attempts }),
            )),
        }
    }
}
