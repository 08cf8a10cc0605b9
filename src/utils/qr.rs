//! QR code rendering for short URLs.
//!
//! Renders the short URL as an SVG QR code and wraps it in a base64 `data:`
//! URL so clients can embed it directly in an `<img>` tag.

use crate::error::AppError;
use base64::Engine as _;
use qrcode::QrCode;
use qrcode::render::svg;
use serde_json::json;

/// Renders `url` as a scannable QR code, returned as a
/// `data:image/svg+xml;base64,...` URL.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the payload cannot be encoded
/// (only possible for inputs far beyond URL length limits).
pub fn qr_data_url(url: &str) -> Result<String, AppError> {
    let code = QrCode::new(url.as_bytes()).map_err(|e| {
        AppError::internal(
            "Failed to render QR code",
            json!({ "reason": e.to_string() }),
        )
    })?;

    let image = code
        .render()
        .min_dimensions(200, 200)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    Ok(format!(
        "data:image/svg+xml;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(image)
    ))
}
