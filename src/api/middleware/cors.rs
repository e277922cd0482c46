//! Permissive CORS middleware.

use std::time::Duration;

use tower_http::cors::{Any, CorsLayer};

/// Creates a CORS layer that accepts any origin, method, and header.
///
/// The service exposes no credentials or sessions, so a wide-open policy is
/// sufficient for the bundled web UI and third-party callers alike.
/// Preflight results are cached for 24 hours.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(86_400))
}
