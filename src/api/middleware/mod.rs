//! Request processing middleware.
//!
//! - [`cors`] - Permissive CORS policy
//! - [`metrics`] - Counter/latency collection into the injected metrics object
//! - [`rate_limit`] - Per-IP token bucket
//! - [`tracing`] - Structured request/response logging

pub mod cors;
pub mod metrics;
pub mod rate_limit;
pub mod tracing;
