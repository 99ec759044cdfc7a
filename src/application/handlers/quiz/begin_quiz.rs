//! BeginQuizHandler - Query handler for the first question.

use std::sync::Arc;

use tracing::debug;

use crate::domain::quiz::{self, Dataset, QuestionView, TraversalError};

/// Handler for starting a traversal.
pub struct BeginQuizHandler {
    dataset: Arc<Dataset>,
}

impl BeginQuizHandler {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn handle(&self) -> Result<QuestionView, TraversalError> {
        let view = quiz::begin(&self.dataset)?;
        debug!(step_id = %view.step_id, "Quiz started");
        Ok(view)
    }
}
