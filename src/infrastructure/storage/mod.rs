//! Concrete storage backends.

pub mod memory;

pub use memory::MemoryStorage;
