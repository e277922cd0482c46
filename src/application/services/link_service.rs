//! Link creation and resolution service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::storage::Storage;
use crate::error::AppError;
use crate::utils::id_generator::generate_id;
use crate::utils::url_normalizer::normalize_url;

/// Generation attempts before giving up on a unique id.
///
/// Ids carry ~40 bits of entropy, so the birthday-collision probability is
/// low but nonzero; a bounded retry avoids spinning forever if a backend
/// misbehaves.
const MAX_ATTEMPTS: usize = 5;

/// Service for creating and resolving short links.
///
/// Holds no mutable state of its own; the storage backend is the only shared
/// resource, so the service is safe to share across concurrent requests.
pub struct LinkService<S: Storage> {
    storage: Arc<S>,
}

impl<S: Storage> LinkService<S> {
    /// Creates a new link service over the given storage backend.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Shortens a raw URL and returns the freshly assigned id.
    ///
    /// The input is normalized first (see
    /// [`crate::utils::url_normalizer::normalize_url`]), then a random id is
    /// claimed with an atomic insert. A rejected insert is a collision and
    /// triggers a fresh draw, up to [`MAX_ATTEMPTS`] in total.
    ///
    /// Either fully succeeds (normalized URL stored under a new id) or
    /// produces nothing; there is no partial-failure state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for input that does not normalize,
    /// [`AppError::Internal`] when all attempts collide or the backend fails.
    pub async fn shorten(&self, raw_url: &str) -> Result<String, AppError> {
        let normalized = normalize_url(raw_url)
            .map_err(|e| AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() })))?;

        for _ in 0..MAX_ATTEMPTS {
            let id = generate_id();
            if self.storage.insert_if_absent(&id, &normalized).await? {
                return Ok(id);
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique short id",
            json!({ "code": "id_generation_exhausted", "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Resolves an id to its stored URL.
    ///
    /// `None` means the id was never assigned; that is a normal result, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend failures.
    pub async fn resolve(&self, id: &str) -> Result<Option<String>, AppError> {
        Ok(self.storage.get(id).await?)
    }

    /// Number of links currently stored. Consumed by the health endpoint.
    pub async fn link_count(&self) -> Result<usize, AppError> {
        Ok(self.storage.len().await?)
    }

    /// Constructs the full short URL for an id.
    pub fn short_url(&self, base_url: &str, id: &str) -> String {
        format!("{}/s/{}", base_url.trim_end_matches('/'), id)
    }
}
