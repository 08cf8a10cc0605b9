//! Handler for short URL details.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::shorten::UrlResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_code_format;
use crate::utils::qr::qr_data_url;

/// Returns the record for a short code, without its access counter.
///
/// # Endpoint
///
/// `GET /shorten/{code}`
///
/// # Errors
///
/// Returns 400 for a malformed code and 404 for an unknown one.
pub async fn details_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlResponse>, AppError> {
    validate_code_format(&code)?;

    let url = state.url_service.get_by_code(&code).await?;

    let short_url = state.short_url(&url.short_code);
    let response = UrlResponse::new(&url, short_url.clone())
        .without_access_count()
        .with_qr_code(qr_data_url(&short_url)?);

    Ok(Json(response))
}
