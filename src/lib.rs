//! # snip
//!
//! A small self-hosted URL shortener built with Axum.
//!
//! ## Architecture
//!
//! The crate follows a layered structure with clear seams:
//!
//! - **Domain Layer** ([`domain`]) - The storage contract
//! - **Application Layer** ([`application`]) - Shortening and resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory store
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Cryptographically random 7-character short ids with bounded collision
//!   retry
//! - URL normalization (scheme inference, lowercase host)
//! - Atomic insert-if-absent storage contract, in-memory by default
//! - Rate limiting, CORS, request tracing, and injected HTTP metrics
//! - Bundled single-page web UI
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional overrides
//! export LISTEN="0.0.0.0:8080"
//! export BASE_URL="https://snip.example.com"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]; see the
//! [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod metrics;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::storage::{Storage, StorageError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::storage::MemoryStorage;
    pub use crate::state::AppState;
}
