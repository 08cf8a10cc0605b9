//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health with a database connectivity check.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: database reachable
/// - **503 Service Unavailable**: database check failed
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.db.as_ref())
        .await
    {
        Ok(_) => CheckStatus {
            status: "ok",
            message: "Connected".to_string(),
        },
        Err(e) => {
            tracing::error!(error = %e, "Health check database query failed");
            CheckStatus {
                status: "error",
                message: e.to_string(),
            }
        }
    };

    let healthy = database.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { database },
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
