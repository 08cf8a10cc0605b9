//! DTOs for the update and delete endpoints.

use serde::Deserialize;
use validator::Validate;

/// Request body for `PUT /shorten/{code}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUrlRequest {
    /// New destination URL for this code.
    #[validate(url(message = "A valid URL is required (e.g., https://example.com)"))]
    pub url: String,

    /// Shared-secret credential; checked after URL validation.
    pub api_key: Option<String>,
}

/// Request body for `DELETE /shorten/{code}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUrlRequest {
    pub api_key: Option<String>,
}
