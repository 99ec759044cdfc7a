//! DatasetSource port - where the raw quiz document comes from.

use async_trait::async_trait;

use crate::domain::quiz::RawDataset;

/// Errors that can occur while fetching a dataset document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Document not found
    NotFound(String),
    /// IO error
    Io(String),
    /// Document could not be deserialized
    Parse(String),
    /// Document format is not recognized
    UnsupportedFormat(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Dataset not found: {}", msg),
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::UnsupportedFormat(msg) => write!(f, "Unsupported dataset format: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

/// Supplies the raw dataset once at startup.
///
/// Implementations only deserialize; validation belongs to
/// [`Dataset::load`](crate::domain::quiz::Dataset::load).
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch and deserialize the dataset document
    async fn fetch(&self) -> Result<RawDataset, SourceError>;

    /// Human-readable description of the source, for logs
    fn describe(&self) -> String;
}
