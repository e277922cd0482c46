//! In-memory storage implementation.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::storage::{Storage, StorageError};

/// In-memory link store guarded by a reader/writer lock.
///
/// Multiple concurrent readers are allowed; writers are exclusive. The guard
/// is only held across map operations and never across an await point, so
/// lookups stay non-blocking in practice.
///
/// This implementation never returns [`StorageError`].
#[derive(Debug, Default)]
pub struct MemoryStorage {
    links: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still holds a structurally sound map of owned strings,
    // so the guard is recovered instead of surfacing an error.
    fn read_links(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, String>> {
        self.links.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_links(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, String>> {
        self.links.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn insert_if_absent(&self, id: &str, url: &str) -> Result<bool, StorageError> {
        let mut links = self.write_links();
        match links.entry(id.to_owned()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(entry) => {
                entry.insert(url.to_owned());
                Ok(true)
            }
        }
    }

    async fn get(&self, id: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_links().get(id).cloned())
    }

    async fn len(&self) -> Result<usize, StorageError> {
        Ok(self.read_links().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_insert_then_get() {
        let storage = MemoryStorage::new();

        let inserted = storage
            .insert_if_absent("abc1234", "https://example.com")
            .await
            .unwrap();
        assert!(inserted);

        let url = storage.get("abc1234").await.unwrap();
        assert_eq!(url.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_get_missing_id_is_none_not_error() {
        let storage = MemoryStorage::new();
        let url = storage.get("missing").await.unwrap();
        assert!(url.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_insert_keeps_original() {
        let storage = MemoryStorage::new();

        assert!(
            storage
                .insert_if_absent("abc1234", "https://first.example.com")
                .await
                .unwrap()
        );
        assert!(
            !storage
                .insert_if_absent("abc1234", "https://second.example.com")
                .await
                .unwrap()
        );

        let url = storage.get("abc1234").await.unwrap();
        assert_eq!(url.as_deref(), Some("https://first.example.com"));
    }

    #[tokio::test]
    async fn test_len_counts_links() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.len().await.unwrap(), 0);

        storage
            .insert_if_absent("one1111", "https://example.com/1")
            .await
            .unwrap();
        storage
            .insert_if_absent("two2222", "https://example.com/2")
            .await
            .unwrap();

        assert_eq!(storage.len().await.unwrap(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_insert_single_winner() {
        let storage = Arc::new(MemoryStorage::new());

        let mut handles = Vec::new();
        for i in 0..32 {
            let storage = storage.clone();
            handles.push(tokio::spawn(async move {
                storage
                    .insert_if_absent("raced12", &format!("https://example.com/{i}"))
                    .await
                    .unwrap()
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(storage.len().await.unwrap(), 1);
    }
}
