//! Application error types and HTTP response mapping.
//!
//! Every failure surfaced to a caller is serialized as a JSON body of the form
//! `{"error": {"code", "message", "details"}}`; errors are never silently
//! swallowed and never rendered as redirects.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload embedded in every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application-level error taxonomy.
///
/// Each variant maps to exactly one HTTP status:
///
/// | Variant        | Status |
/// |----------------|--------|
/// | `Validation`   | 400    |
/// | `Unauthorized` | 401    |
/// | `NotFound`     | 404    |
/// | `Conflict`     | 409    |
/// | `Gone`         | 410    |
/// | `Internal`     | 500    |
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Unauthorized { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Gone { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn gone(message: impl Into<String>, details: Value) -> Self {
        Self::Gone {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::Unauthorized { .. } => (StatusCode::UNAUTHORIZED, "unauthorized"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            AppError::Gone { .. } => (StatusCode::GONE, "gone"),
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::Unauthorized { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Gone { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }

    fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::Unauthorized { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Conflict { details, .. }
            | AppError::Gone { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        ErrorInfo {
            code,
            message: self.message().to_string(),
            details: self.details().clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, details = %self.details(), "Internal error");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}
