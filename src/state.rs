//! Shared application state.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::storage::MemoryStorage;
use crate::metrics::HttpMetrics;

/// Link service specialized to the in-memory store.
pub type SharedLinkService = Arc<LinkService<MemoryStorage>>;

/// State shared by every handler. Cheap to clone; all fields are
/// reference-counted or small.
#[derive(Clone)]
pub struct AppState {
    pub link_service: SharedLinkService,
    /// Public base for short links, without a trailing slash.
    pub base_url: String,
    pub metrics: Arc<HttpMetrics>,
}

impl AppState {
    pub fn new(
        link_service: SharedLinkService,
        base_url: impl Into<String>,
        metrics: Arc<HttpMetrics>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            link_service,
            base_url,
            metrics,
        }
    }
}
