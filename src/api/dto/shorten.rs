//! DTOs for URL creation and the shared URL response shape.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::ShortUrl;

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{4,10}$").unwrap());

/// Request body for `POST /shorten`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten (must be absolute HTTP/HTTPS).
    #[validate(url(message = "A valid URL is required (e.g., https://example.com)"))]
    pub url: String,

    /// Optional caller-supplied short code.
    #[validate(regex(
        path = "*CUSTOM_CODE_REGEX",
        message = "Custom code must be 4-10 alphanumeric characters"
    ))]
    pub custom_code: Option<String>,

    /// Optional lifetime in days; the record answers 410 Gone afterwards.
    #[validate(range(min = 1, max = 3650))]
    pub expires_in_days: Option<i64>,
}

/// JSON representation of a short URL record.
///
/// `access_count` and `qr_code` are optional so endpoints can include or
/// omit them: details responses drop the counter, deduplicated create
/// responses carry no QR code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlResponse {
    pub id: i64,
    pub url: String,
    pub short_code: String,
    pub short_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_count: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
}

impl UrlResponse {
    /// Builds the response for a record, including its access counter.
    pub fn new(entity: &ShortUrl, short_url: String) -> Self {
        Self {
            id: entity.id,
            url: entity.original_url.clone(),
            short_code: entity.short_code.clone(),
            short_url,
            access_count: Some(entity.access_count),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            expires_at: entity.expires_at,
            qr_code: None,
        }
    }

    /// Drops the access counter from the payload.
    pub fn without_access_count(mut self) -> Self {
        self.access_count = None;
        self
    }

    /// Attaches a rendered QR code data URL.
    pub fn with_qr_code(mut self, qr_code: String) -> Self {
        self.qr_code = Some(qr_code);
        self
    }
}
