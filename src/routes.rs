//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /shorten`               - Create a short URL (rate-limited)
//! - `GET    /shorten/{code}`        - Record details + QR code
//! - `GET    /shorten/{code}/stats`  - Record + access history
//! - `PUT    /shorten/{code}`        - Replace destination (credential, rate-limited)
//! - `DELETE /shorten/{code}`        - Remove record (credential, rate-limited)
//! - `GET    /{code}`                - Redirect (public)
//! - `GET    /health`                - Health check (public)
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging on every route
//! - **Rate limiting** - per-IP limiter on the mutating routes only

use axum::{
    Router,
    routing::{get, post, put},
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{
    delete_url_handler, details_handler, health_handler, redirect_handler, shorten_handler,
    stats_handler, update_url_handler,
};
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// The mutating routes live in their own sub-router so the rate limiter
/// never touches reads or redirects; axum merges the method routers for
/// the shared `/shorten/{code}` path.
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let mutating = Router::new()
        .route("/shorten", post(shorten_handler))
        .route(
            "/shorten/{code}",
            put(update_url_handler).delete(delete_url_handler),
        )
        .layer(rate_limit::layer(
            config.rate_limit_window_secs,
            config.rate_limit_max_requests,
        ));

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/shorten/{code}", get(details_handler))
        .route("/shorten/{code}/stats", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .merge(mutating)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
