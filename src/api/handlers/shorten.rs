//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com/some/page" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortUrl": "http://localhost:8080/s/aZ3_x9Q" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the URL fails validation or normalization,
/// 500 when id generation runs out of retries.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let id = state.link_service.shorten(&payload.url).await?;
    let short_url = state.link_service.short_url(&state.base_url, &id);

    Ok(Json(ShortenResponse { short_url }))
}
