//! Quiz-specific error types.
//!
//! [`DatasetError`] is fatal and only produced while loading. [`TraversalError`]
//! is returned per request and always carries a message telling the caller
//! what to resubmit.

use std::fmt;
use thiserror::Error;

use super::model::EntityKind;
use crate::domain::foundation::{ErrorCode, QuestionId, StepId};

/// Where an invalid entity sits in its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    /// The entity declared this identifier.
    Id(i64),
    /// The entity has no usable identifier; 1-based position in its collection.
    Position(usize),
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(id) => write!(f, "id {}", id),
            Locator::Position(pos) => write!(f, "#{}", pos),
        }
    }
}

/// Structural problems that make a dataset unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("Dataset has no {}", .0.collection())]
    EmptyCollection(EntityKind),

    #[error("{kind} {at} is missing required field '{field}'")]
    MissingRequiredField {
        kind: EntityKind,
        at: Locator,
        field: &'static str,
    },

    #[error("{kind} {at} has invalid identifier in '{field}': {value}")]
    InvalidIdentifier {
        kind: EntityKind,
        at: Locator,
        field: &'static str,
        value: i64,
    },

    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: EntityKind, id: i64 },

    #[error("step {step} has both a result and a question; a step must be exactly one")]
    ConflictingStepKind { step: StepId },

    #[error("step {step} references unknown {target_kind} {target} via '{field}'")]
    InvalidReference {
        step: StepId,
        field: &'static str,
        target_kind: EntityKind,
        target: i64,
    },

    #[error("step {step} routes answer '{label}' which is not a choice of question {question}")]
    UnmatchedAnswerLabel {
        step: StepId,
        question: QuestionId,
        label: String,
    },

    #[error("Entry step {step} is not usable: {reason}")]
    InvalidEntryStep { step: i64, reason: &'static str },

    #[error("Steps form a cycle: {}", format_path(.path))]
    CycleDetected { path: Vec<StepId> },
}

fn format_path(path: &[StepId]) -> String {
    path.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Request-time errors raised while resolving an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// The dataset has no entry step.
    EmptyDataset,
    /// The submitted step id does not name a step.
    InvalidStep(i64),
    /// The submitted answer is empty.
    EmptyAnswer { step: StepId },
    /// The answer is not an edge of the current step.
    UnknownChoice {
        step: StepId,
        answer: String,
        /// Labels the step does accept, in display order. Empty for terminal steps.
        accepted: Vec<String>,
    },
    /// A validated reference failed to resolve.
    Inconsistent { step: StepId },
}

impl TraversalError {
    pub fn invalid_step(step_id: i64) -> Self {
        TraversalError::InvalidStep(step_id)
    }

    pub fn empty_answer(step: StepId) -> Self {
        TraversalError::EmptyAnswer { step }
    }

    pub fn unknown_choice(step: StepId, answer: impl Into<String>, accepted: Vec<String>) -> Self {
        TraversalError::UnknownChoice {
            step,
            answer: answer.into(),
            accepted,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TraversalError::EmptyDataset => ErrorCode::EmptyDataset,
            TraversalError::InvalidStep(_) => ErrorCode::InvalidStep,
            TraversalError::EmptyAnswer { .. } => ErrorCode::EmptyAnswer,
            TraversalError::UnknownChoice { .. } => ErrorCode::UnknownChoice,
            TraversalError::Inconsistent { .. } => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            TraversalError::EmptyDataset => "No questions are available".to_string(),
            TraversalError::InvalidStep(id) => format!(
                "Wrong step_id {}: use the step_id returned with the last question and submit again",
                id
            ),
            TraversalError::EmptyAnswer { step } => format!(
                "Answer cannot be empty: submit one of the answers listed for step {}",
                step
            ),
            TraversalError::UnknownChoice {
                step,
                answer,
                accepted,
            } if accepted.is_empty() => format!(
                "Step {} is a final result and accepts no answers (got '{}'): begin again",
                step, answer
            ),
            TraversalError::UnknownChoice {
                step,
                answer,
                accepted,
            } => format!(
                "Wrong answer '{}' for step {}: answer must be one of {}",
                answer,
                step,
                accepted.join(", ")
            ),
            TraversalError::Inconsistent { step } => {
                format!("Step {} could not be resolved", step)
            }
        }
    }
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TraversalError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(n: u32) -> StepId {
        StepId::new(n).unwrap()
    }

    #[test]
    fn empty_collection_names_the_collection() {
        let err = DatasetError::EmptyCollection(EntityKind::Step);
        assert_eq!(err.to_string(), "Dataset has no steps");
    }

    #[test]
    fn missing_field_locates_entity_by_position() {
        let err = DatasetError::MissingRequiredField {
            kind: EntityKind::Question,
            at: Locator::Position(3),
            field: "id",
        };
        assert_eq!(err.to_string(), "question #3 is missing required field 'id'");
    }

    #[test]
    fn invalid_reference_names_source_and_target() {
        let err = DatasetError::InvalidReference {
            step: sid(2),
            field: "result_id",
            target_kind: EntityKind::Result,
            target: 9,
        };
        assert_eq!(
            err.to_string(),
            "step 2 references unknown result 9 via 'result_id'"
        );
    }

    #[test]
    fn cycle_lists_path() {
        let err = DatasetError::CycleDetected {
            path: vec![sid(1), sid(2), sid(1)],
        };
        assert_eq!(err.to_string(), "Steps form a cycle: 1 -> 2 -> 1");
    }

    #[test]
    fn traversal_error_codes() {
        assert_eq!(TraversalError::invalid_step(0).code(), ErrorCode::InvalidStep);
        assert_eq!(
            TraversalError::empty_answer(sid(1)).code(),
            ErrorCode::EmptyAnswer
        );
        assert_eq!(
            TraversalError::unknown_choice(sid(1), "x", vec![]).code(),
            ErrorCode::UnknownChoice
        );
        assert_eq!(TraversalError::EmptyDataset.code(), ErrorCode::EmptyDataset);
    }

    #[test]
    fn unknown_choice_lists_accepted_answers() {
        let err = TraversalError::unknown_choice(
            sid(1),
            "hall",
            vec!["courtyard".to_string(), "garden".to_string()],
        );
        assert_eq!(
            err.message(),
            "Wrong answer 'hall' for step 1: answer must be one of courtyard, garden"
        );
    }

    #[test]
    fn unknown_choice_on_terminal_step_says_so() {
        let err = TraversalError::unknown_choice(sid(4), "yes", vec![]);
        assert!(err.message().contains("final result"));
    }

    #[test]
    fn invalid_step_message_asks_to_resubmit() {
        let err = TraversalError::invalid_step(-2);
        assert!(err.to_string().starts_with("Wrong step_id -2"));
    }
}
