//! Handlers for mutating endpoints (update, delete).
//!
//! Both require the shared-secret credential in the request body.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::UrlResponse;
use crate::api::dto::update_url::{DeleteUrlRequest, UpdateUrlRequest};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::validate_url;

/// Replaces the destination URL of a short code.
///
/// # Endpoint
///
/// `PUT /shorten/{code}`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://new-destination.com",
///   "apiKey": "..."
/// }
/// ```
///
/// The URL is validated before the credential, so a malformed URL yields
/// 400 even with a bad key.
///
/// # Errors
///
/// Returns 400 for an invalid URL, 401 for a wrong credential, 404 for
/// an unknown code.
pub async fn update_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUrlRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    payload.validate()?;
    validate_url(&payload.url).map_err(|e| {
        AppError::bad_request(
            "A valid URL is required (e.g., https://example.com)",
            json!({ "reason": e.to_string() }),
        )
    })?;

    state.auth_service.authorize(payload.api_key.as_deref())?;

    let url = state
        .url_service
        .update_original_url(&code, &payload.url)
        .await?;

    tracing::info!(code = %code, "Updated short URL");

    let short_url = state.short_url(&url.short_code);

    Ok(Json(UrlResponse::new(&url, short_url)))
}

/// Deletes a short code and, via the cascade, its access logs.
///
/// # Endpoint
///
/// `DELETE /shorten/{code}`
///
/// # Request Body
///
/// ```json
/// { "apiKey": "..." }
/// ```
///
/// # Errors
///
/// Returns 401 for a wrong credential and 404 for an unknown code.
pub async fn delete_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<DeleteUrlRequest>,
) -> Result<StatusCode, AppError> {
    state.auth_service.authorize(payload.api_key.as_deref())?;

    state.url_service.delete(&code).await?;

    tracing::info!(code = %code, "Deleted short URL");

    Ok(StatusCode::NO_CONTENT)
}
