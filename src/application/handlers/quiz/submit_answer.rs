//! SubmitAnswerHandler - Resolves one answer to the next question or a match.

use std::sync::Arc;

use tracing::debug;

use crate::domain::quiz::{self, Dataset, Next, TraversalError};

/// Command carrying the client's position and answer.
///
/// `step_id` is kept as the raw client value so that zero and negative ids
/// are reported as invalid steps rather than rejected by the transport.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub step_id: i64,
    pub answer: String,
}

/// Handler for answer submission.
pub struct SubmitAnswerHandler {
    dataset: Arc<Dataset>,
}

impl SubmitAnswerHandler {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn handle(&self, cmd: SubmitAnswerCommand) -> Result<Next, TraversalError> {
        match quiz::answer(&self.dataset, cmd.step_id, &cmd.answer) {
            Ok(next) => {
                match &next {
                    Next::Question(view) => {
                        debug!(from = cmd.step_id, to = %view.step_id, "Answer routed to question")
                    }
                    Next::Match(view) => {
                        debug!(from = cmd.step_id, result = %view.name, "Answer reached a match")
                    }
                }
                Ok(next)
            }
            Err(e) => {
                debug!(step_id = cmd.step_id, code = %e.code(), "Answer rejected");
                Err(e)
            }
        }
    }
}
