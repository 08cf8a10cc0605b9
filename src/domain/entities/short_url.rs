//! Short URL entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL record with access statistics.
///
/// Maps directly onto a row of the `urls` table. A record has no tracked
/// lifecycle states: it is active while present and unexpired, expired once
/// `expires_at` is in the past, and gone once deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShortUrl {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub access_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortUrl {
    /// Returns true if the record has passed its expiry time.
    ///
    /// Records without `expires_at` never expire.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| e <= Utc::now())
    }
}

/// Input data for creating a new short URL.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub original_url: String,
    pub short_code: String,
    pub expires_at: Option<DateTime<Utc>>,
}
