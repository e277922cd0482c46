//! Utility functions for id generation and URL processing.
//!
//! - [`id_generator`] - Random short id generation
//! - [`url_normalizer`] - URL normalization and sanitization

pub mod id_generator;
pub mod url_normalizer;
