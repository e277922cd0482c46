//! Handler for short link redirects.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /s/{id}`
///
/// Responds `302 Found` with a `Location` header on a hit. axum's `Redirect`
/// helper only offers 303/307/308, so the response is assembled by hand.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown id, 500 on storage failures.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    match state.link_service.resolve(&id).await? {
        Some(url) => {
            debug!(id = %id, target = %url, "redirecting");
            Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
        }
        None => Err(AppError::not_found(
            "Short link not found",
            json!({ "id": id }),
        )),
    }
}
