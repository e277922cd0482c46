//! HTTP metrics collection middleware.

use std::time::Instant;

use axum::{extract::Request, extract::State, middleware::Next, response::Response};

use crate::state::AppState;

/// Records request counts, status classes, and latency into the
/// [`crate::metrics::HttpMetrics`] instance carried by [`AppState`].
pub async fn track(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state.metrics.request_started();
    let start = Instant::now();

    let response = next.run(request).await;

    state
        .metrics
        .request_finished(response.status().as_u16(), start.elapsed());

    response
}
