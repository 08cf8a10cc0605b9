//! Short code generation and validation.
//!
//! Codes are drawn uniformly from the 62-character alphanumeric alphabet.
//! Generation retries a bounded number of times against a caller-supplied
//! uniqueness check and reports exhaustion as a tagged result rather than
//! an error type of its own.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};
use serde_json::json;

/// Default generated code length.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Maximum generation attempts before giving up.
pub const MAX_ATTEMPTS: usize = 10;

/// Codes that collide with the service's own route namespace.
///
/// A link with one of these codes would be unreachable for redirects.
const RESERVED_CODES: &[&str] = &["shorten", "health"];

/// Outcome of a bounded unique-code generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedCode {
    /// A code that passed the uniqueness check.
    Unique(String),
    /// No unique code was found within the attempt bound.
    Exhausted { attempts: usize },
}

/// Produces a random code of exactly `length` alphanumeric characters.
///
/// Uses the thread-local RNG; codes are not required to be
/// cryptographically secure.
pub fn random_code(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Generates a code of `length` characters for which `is_taken` returns false.
///
/// Retries up to [`MAX_ATTEMPTS`] times. The uniqueness check and any later
/// insert are not atomic; callers must treat the storage-level unique
/// constraint as the authoritative guard.
///
/// # Errors
///
/// Propagates errors from the uniqueness check unchanged. Exhaustion is not
/// an error at this level; it is reported as [`GeneratedCode::Exhausted`].
pub async fn generate_unique_code<F, Fut>(
    length: usize,
    mut is_taken: F,
) -> Result<GeneratedCode, AppError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, AppError>>,
{
    for _ in 0..MAX_ATTEMPTS {
        let code = random_code(length);

        if !is_taken(code.clone()).await? {
            return Ok(GeneratedCode::Unique(code));
        }
    }

    Ok(GeneratedCode::Exhausted {
        attempts: MAX_ATTEMPTS,
    })
}

/// Validates the shape of a short code taken from a request path.
///
/// # Errors
///
/// Returns [`AppError::Validation`] unless the code is 4-10 alphanumeric
/// characters.
pub fn validate_code_format(code: &str) -> Result<(), AppError> {
    if code.len() < 4 || code.len() > 10 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Invalid short code",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 4-10 characters
/// - Allowed characters: ASCII letters and digits
/// - Cannot be a reserved system code
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < 4 || code.len() > 10 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Custom code must be 4-10 alphanumeric characters",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
