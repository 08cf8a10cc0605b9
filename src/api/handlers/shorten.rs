//! Handler for the URL creation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::qr::qr_data_url;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/page",
///   "customCode": "promo1",    // optional
///   "expiresInDays": 30        // optional
/// }
/// ```
///
/// # Response
///
/// - **200 OK** with the existing record when the exact URL was already
///   shortened (no QR code in this branch)
/// - **201 Created** with the new record and a QR code encoding the
///   short URL
///
/// # Errors
///
/// Returns 400 for an invalid URL, custom code, or expiry; 409 when the
/// custom code is taken; 500 when code generation is exhausted.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<UrlResponse>), AppError> {
    payload.validate()?;

    let outcome = state
        .url_service
        .create_short_url(payload.url, payload.custom_code, payload.expires_in_days)
        .await?;

    let short_url = state.short_url(&outcome.url.short_code);
    let response = UrlResponse::new(&outcome.url, short_url.clone());

    if !outcome.created {
        return Ok((StatusCode::OK, Json(response)));
    }

    tracing::info!(code = %outcome.url.short_code, "Created short URL");

    let response = response.with_qr_code(qr_data_url(&short_url)?);

    Ok((StatusCode::CREATED, Json(response)))
}
