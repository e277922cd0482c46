//! Infrastructure layer with concrete implementations of domain contracts.

pub mod storage;
