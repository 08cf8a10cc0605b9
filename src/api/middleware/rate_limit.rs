//! Per-client rate limiting for mutating routes.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a rate limiter sized from the configured window and quota.
///
/// The GCRA limiter admits up to `max_requests` per client within any
/// `window_secs`-long window, replenishing one permit every
/// `window / max` interval. Requests exceeding the limit receive
/// `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Limits are applied per client IP address extracted from the socket
/// peer address.
///
/// # Panics
///
/// Panics at startup if `window_secs` or `max_requests` is zero; config
/// validation rejects both before this is called.
pub fn layer(
    window_secs: u64,
    max_requests: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let period = Duration::from_secs(window_secs) / max_requests;

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .period(period)
            .burst_size(max_requests)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
