//! Dataset source adapters.

mod file_source;
mod in_memory;

pub use file_source::{DatasetFormat, FileDatasetSource};
pub use in_memory::InMemoryDatasetSource;
