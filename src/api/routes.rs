//! API route configuration.

use axum::{Router, routing::post};

use crate::api::handlers::shorten_handler;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short link
///
/// Method routing rejects anything but POST with `405 Method Not Allowed`.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}
