//! LoadDatasetHandler - Builds the shared dataset once at startup.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::quiz::{Dataset, DatasetError, LoadOptions};
use crate::ports::{DatasetSource, SourceError};

/// Reasons the service cannot start serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to fetch dataset: {0}")]
    Source(#[from] SourceError),

    #[error("Invalid dataset: {0}")]
    Invalid(#[from] DatasetError),
}

/// Handler that fetches, validates and freezes the dataset.
pub struct LoadDatasetHandler {
    source: Arc<dyn DatasetSource>,
    options: LoadOptions,
}

impl LoadDatasetHandler {
    pub fn new(source: Arc<dyn DatasetSource>, options: LoadOptions) -> Self {
        Self { source, options }
    }

    pub async fn handle(&self) -> Result<Arc<Dataset>, StartupError> {
        let raw = self.source.fetch().await?;
        let dataset = Dataset::load(raw, &self.options)?;

        info!(
            source = %self.source.describe(),
            questions = dataset.question_count(),
            steps = dataset.step_count(),
            results = dataset.result_count(),
            entry_step = %dataset.entry_step_id(),
            "Dataset loaded"
        );

        let report = dataset.graph_report();
        if let Some(path) = &report.cycle {
            let path: Vec<String> = path.iter().map(ToString::to_string).collect();
            warn!(
                cycle = %path.join(" -> "),
                "Step graph contains a cycle; clients may loop"
            );
        }
        if !report.unreachable.is_empty() {
            let ids: Vec<String> = report.unreachable.iter().map(ToString::to_string).collect();
            warn!(
                steps = %ids.join(", "),
                "Steps are unreachable from the entry step"
            );
        }

        Ok(Arc::new(dataset))
    }
}
