//! In-memory dataset source.

use async_trait::async_trait;

use crate::domain::quiz::RawDataset;
use crate::ports::{DatasetSource, SourceError};

/// Hands out a document that was built or parsed elsewhere.
///
/// Used by tests and by callers embedding the engine with a compiled-in quiz.
#[derive(Debug, Clone)]
pub struct InMemoryDatasetSource {
    raw: RawDataset,
}

impl InMemoryDatasetSource {
    pub fn new(raw: RawDataset) -> Self {
        Self { raw }
    }

    /// Parses a JSON document up front.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let raw = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("invalid JSON: {}", e)))?;
        Ok(Self { raw })
    }
}

#[async_trait]
impl DatasetSource for InMemoryDatasetSource {
    async fn fetch(&self) -> Result<RawDataset, SourceError> {
        Ok(self.raw.clone())
    }

    fn describe(&self) -> String {
        format!(
            "in-memory document ({} questions, {} steps, {} results)",
            self.raw.questions.len(),
            self.raw.steps.len(),
            self.raw.results.len()
        )
    }
}
