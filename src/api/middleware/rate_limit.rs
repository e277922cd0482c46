//! Rate limiting middleware using a token bucket.

use std::sync::Arc;
use std::time::Duration;

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-client-IP rate limiter allowing `limit` requests per
/// `window`.
///
/// The bucket replenishes one cell every `window / limit` and bursts up to
/// the full allowance. Requests over the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Client IPs come from the socket peer address, so the router must be served
/// with connect info.
///
/// # Panics
///
/// Panics if `limit` is zero; [`crate::config::Config::validate`] rejects
/// that before the router is built.
pub fn layer(
    limit: u64,
    window: Duration,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let period = (window / limit.max(1) as u32).max(Duration::from_millis(1));

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .period(period)
            .burst_size(limit as u32)
            .finish()
            .expect("rate limiter configuration must be nonzero"),
    );

    GovernorLayer::new(governor_conf)
}
