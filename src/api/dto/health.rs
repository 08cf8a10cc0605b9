//! DTOs for the health check endpoint.

use serde::Serialize;

/// Response for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

/// Per-component check results.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Status of a single component.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: &'static str,
    pub message: String,
}
