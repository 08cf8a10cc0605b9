//! DTOs for per-URL access statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::shorten::UrlResponse;
use crate::domain::entities::AccessLog;

/// One redirect event in a stats response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessEntry {
    pub accessed_at: DateTime<Utc>,
    pub ip_address: String,
}

impl From<AccessLog> for AccessEntry {
    fn from(log: AccessLog) -> Self {
        Self {
            accessed_at: log.accessed_at,
            ip_address: log.ip_address,
        }
    }
}

/// Response for `GET /shorten/{code}/stats`: the full record plus its
/// ordered access history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    pub url: UrlResponse,
    pub access_logs: Vec<AccessEntry>,
}
