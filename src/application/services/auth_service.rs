//! Shared-secret authorization for mutating operations.

use serde_json::json;
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Authorizes update/delete requests against a server-side shared secret.
///
/// Both the configured secret and the caller-supplied value are hashed with
/// SHA-256 before comparison, so the check does not leak the secret's length
/// or a matching prefix through timing.
pub struct AuthService {
    key_digest: String,
}

impl AuthService {
    /// Creates a new authorization service for the configured secret.
    pub fn new(api_key: &str) -> Self {
        Self {
            key_digest: digest(api_key),
        }
    }

    /// Checks a caller-supplied credential.
    ///
    /// A missing credential is treated the same as a wrong one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on mismatch.
    pub fn authorize(&self, provided: Option<&str>) -> Result<(), AppError> {
        let provided = provided.unwrap_or_default();

        if digest(provided) != self.key_digest {
            return Err(AppError::unauthorized("Invalid API key", json!({})));
        }

        Ok(())
    }
}

/// Hex-encoded SHA-256 of `value`.
fn digest(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}
