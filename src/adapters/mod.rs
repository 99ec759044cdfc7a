//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `dataset` - Dataset sources (file, in-memory)
//! - `http` - REST API over axum

pub mod dataset;
pub mod http;

pub use dataset::{FileDatasetSource, InMemoryDatasetSource};
