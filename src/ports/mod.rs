//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DatasetSource` - Supplies the raw question/step/result document

mod dataset_source;

pub use dataset_source::{DatasetSource, SourceError};
