//! Handler for per-URL access statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::shorten::UrlResponse;
use crate::api::dto::stats::{AccessEntry, StatsResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_code_format;

/// Returns the full record plus its ordered access history.
///
/// # Endpoint
///
/// `GET /shorten/{code}/stats`
///
/// # Errors
///
/// Returns 400 for a malformed code and 404 for an unknown one.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    validate_code_format(&code)?;

    let stats = state.stats_service.get_stats(&code).await?;

    let short_url = state.short_url(&stats.url.short_code);

    Ok(Json(StatsResponse {
        url: UrlResponse::new(&stats.url, short_url),
        access_logs: stats.accesses.into_iter().map(AccessEntry::from).collect(),
    }))
}
