//! Validated dataset entities.
//!
//! Instances are only created by [`Dataset::load`](super::Dataset::load) and
//! are read-only afterwards.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{QuestionId, ResultId, StepId};

/// The kind of a dataset entity, used to locate validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Question,
    Step,
    Result,
}

impl EntityKind {
    /// Plural name of the collection holding this kind.
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Question => "questions",
            EntityKind::Step => "steps",
            EntityKind::Result => "results",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Question => "question",
            EntityKind::Step => "step",
            EntityKind::Result => "result",
        };
        write!(f, "{}", s)
    }
}

/// A prompt and its ordered acceptable answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub(super) id: QuestionId,
    pub(super) prompt: String,
    pub(super) choices: Vec<String>,
}

impl Question {
    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Answer labels in display order.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }
}

/// What a step does when reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    /// Poses a question; each answer label leads to another step.
    Question {
        question_id: QuestionId,
        answers: BTreeMap<String, StepId>,
    },
    /// Ends the traversal on a result.
    Terminal { result_id: ResultId },
}

/// A node in the decision graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub(super) id: StepId,
    pub(super) kind: StepKind,
}

impl Step {
    pub fn id(&self) -> StepId {
        self.id
    }

    pub fn kind(&self) -> &StepKind {
        &self.kind
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, StepKind::Terminal { .. })
    }

    /// Next step for an answer label, if the label is an edge of this step.
    pub fn next_for(&self, answer: &str) -> Option<StepId> {
        match &self.kind {
            StepKind::Question { answers, .. } => answers.get(answer).copied(),
            StepKind::Terminal { .. } => None,
        }
    }

    /// Outgoing edges, ordered by answer label.
    pub fn successors(&self) -> impl Iterator<Item = StepId> + '_ {
        let answers = match &self.kind {
            StepKind::Question { answers, .. } => Some(answers.values().copied()),
            StepKind::Terminal { .. } => None,
        };
        answers.into_iter().flatten()
    }
}

/// A terminal match shown when traversal ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub(super) id: ResultId,
    pub(super) name: String,
    pub(super) description: String,
}

impl QuizResult {
    pub fn id(&self) -> ResultId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
