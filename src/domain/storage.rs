//! Storage contract for short link persistence.

use async_trait::async_trait;

/// Errors produced by storage backends.
///
/// The in-memory implementation never fails; this channel exists for future
/// backends that can hit I/O errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Storage interface for short link mappings.
///
/// The store owns the id-to-URL mapping exclusively; services never hold
/// their own copy. Insertion is a single atomic check-and-store so that two
/// concurrent requests can never claim the same id.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::MemoryStorage`] - in-memory map behind
///   a reader/writer lock
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    /// Stores `(id, url)` if `id` is not yet taken.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the id was free and the mapping was stored
    /// - `Ok(false)` if the id already exists (collision); the existing
    ///   mapping is left untouched
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on backend failures.
    async fn insert_if_absent(&self, id: &str, url: &str) -> Result<bool, StorageError>;

    /// Looks up the URL stored under `id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if found
    /// - `Ok(None)` if no such id; this is a normal result, not an error
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on backend failures.
    async fn get(&self, id: &str) -> Result<Option<String>, StorageError>;

    /// Returns the number of stored links.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on backend failures.
    async fn len(&self) -> Result<usize, StorageError>;
}
