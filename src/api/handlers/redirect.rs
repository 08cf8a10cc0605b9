//! Handler for short URL redirects.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_code_format;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Side Effects
///
/// Every successful redirect records an access-log entry (url id + peer
/// address) and increments the access counter via an atomic SQL update.
/// An expired or unknown code records nothing.
///
/// # Errors
///
/// Returns 400 for a malformed code, 404 for an unknown one, and 410 Gone
/// once `expires_at` has passed. Error responses are JSON bodies, never
/// redirects.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    validate_code_format(&code)?;

    let target = state
        .url_service
        .resolve_redirect(&code, &addr.ip().to_string())
        .await?;

    tracing::debug!(code = %code, target = %target, "Redirecting");

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, target)]))
}
