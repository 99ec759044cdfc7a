//! Raw dataset document, as deserialized from the dataset source.
//!
//! Every field is optional here. Absence is a validation concern and is
//! reported by [`Dataset::load`](super::Dataset::load) with the offending
//! entity named, instead of a generic parser error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The whole dataset: questions, steps and results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDataset {
    /// Explicit entry step. When absent the step with the smallest id is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_step: Option<i64>,

    #[serde(default)]
    pub questions: Vec<RawQuestion>,

    #[serde(default)]
    pub steps: Vec<RawStep>,

    #[serde(default)]
    pub results: Vec<RawResult>,
}

/// A question prompt with its ordered list of acceptable answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub question: Option<String>,

    /// Acceptable answer labels, in display order.
    #[serde(default)]
    pub validation: Option<Vec<String>>,
}

/// A node of the decision graph.
///
/// Either `question_id` + `answers`, or `result_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStep {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<i64>,

    /// Answer label -> next step id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<BTreeMap<String, i64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_id: Option<i64>,
}

/// A terminal match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl RawDataset {
    /// Creates a dataset document from its three collections.
    pub fn new(questions: Vec<RawQuestion>, steps: Vec<RawStep>, results: Vec<RawResult>) -> Self {
        Self {
            entry_step: None,
            questions,
            steps,
            results,
        }
    }

    /// Designates an explicit entry step.
    pub fn with_entry_step(mut self, step_id: i64) -> Self {
        self.entry_step = Some(step_id);
        self
    }
}

impl RawQuestion {
    pub fn new<S: Into<String>>(
        id: i64,
        question: impl Into<String>,
        choices: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            id: Some(id),
            question: Some(question.into()),
            validation: Some(choices.into_iter().map(Into::into).collect()),
        }
    }
}

impl RawStep {
    /// A step that asks a question and routes each answer to another step.
    pub fn question<S: Into<String>>(
        id: i64,
        question_id: i64,
        answers: impl IntoIterator<Item = (S, i64)>,
    ) -> Self {
        Self {
            id: Some(id),
            question_id: Some(question_id),
            answers: Some(
                answers
                    .into_iter()
                    .map(|(label, next)| (label.into(), next))
                    .collect(),
            ),
            result_id: None,
        }
    }

    /// A terminal step pointing at a result.
    pub fn terminal(id: i64, result_id: i64) -> Self {
        Self {
            id: Some(id),
            question_id: None,
            answers: None,
            result_id: Some(result_id),
        }
    }
}

impl RawResult {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }
}
