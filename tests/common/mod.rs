#![allow(dead_code)]

use std::sync::Arc;

use snip::application::services::LinkService;
use snip::infrastructure::storage::MemoryStorage;
use snip::metrics::HttpMetrics;
use snip::state::AppState;

/// Builds an [`AppState`] over a fresh in-memory store.
///
/// The store is also returned directly so tests can seed links under known
/// ids.
pub fn create_test_state() -> (AppState, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let link_service = Arc::new(LinkService::new(storage.clone()));

    let state = AppState::new(
        link_service,
        "http://localhost:8080",
        Arc::new(HttpMetrics::new()),
    );

    (state, storage)
}

pub async fn seed_link(storage: &MemoryStorage, id: &str, url: &str) {
    use snip::domain::storage::Storage;

    assert!(
        storage.insert_if_absent(id, url).await.unwrap(),
        "seed id {id:?} already taken"
    );
}
