//! Original URL validation.
//!
//! Accepts only absolute http/https URLs with a host. The URL is stored as
//! submitted; deduplication compares the exact string.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Validates that `input` is an absolute http/https URL.
///
/// # Security
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:`,
/// `file:`, etc.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for unparseable input,
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes, and
/// [`UrlValidationError::MissingHost`] for URLs without a host.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none() {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}
