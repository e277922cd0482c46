//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. Schemeless input is accepted; `https://` is assumed.
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: String,
}

/// Response carrying the full short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}
