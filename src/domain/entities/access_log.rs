//! Access log entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// One recorded redirect of a short URL.
///
/// Rows are created on every successful redirect and never mutated; their
/// lifecycle is tied to the parent URL (cascade delete).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccessLog {
    #[allow(dead_code)]
    pub id: i64,
    pub url_id: i64,
    pub accessed_at: DateTime<Utc>,
    pub ip_address: String,
}

/// Input data for recording a redirect event.
///
/// `url_id` must reference an existing URL; the timestamp is assigned by
/// the database.
#[derive(Debug, Clone)]
pub struct NewAccess {
    pub url_id: i64,
    pub ip_address: String,
}
