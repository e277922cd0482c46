//! Core domain contracts.
//!
//! Defines the [`storage::Storage`] trait that abstracts where short link
//! mappings live. Concrete implementations sit in
//! `crate::infrastructure::storage`; mocks are auto-generated via `mockall`
//! for testing.

pub mod storage;

pub use storage::{Storage, StorageError};

#[cfg(test)]
pub use storage::MockStorage;
