//! Handler exposing the HTTP metrics snapshot.

use axum::{Json, extract::State};

use crate::metrics::MetricsSnapshot;
use crate::state::AppState;

/// Returns a JSON snapshot of the injected [`crate::metrics::HttpMetrics`].
///
/// # Endpoint
///
/// `GET /metrics`
pub async fn metrics_handler(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
