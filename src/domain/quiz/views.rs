//! Presentation shapes returned by traversal.

use super::model::{Question, QuizResult};
use crate::domain::foundation::StepId;

/// A question to show, tagged with the step the next answer must be sent for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub step_id: StepId,
    pub question: String,
    pub answers: Vec<String>,
}

impl QuestionView {
    pub fn new(step_id: StepId, question: &Question) -> Self {
        Self {
            step_id,
            question: question.prompt().to_string(),
            answers: question.choices().to_vec(),
        }
    }
}

/// A terminal match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub name: String,
    pub description: String,
}

impl From<&QuizResult> for ResultView {
    fn from(result: &QuizResult) -> Self {
        Self {
            name: result.name().to_string(),
            description: result.description().to_string(),
        }
    }
}

/// Outcome of submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Next {
    Question(QuestionView),
    Match(ResultView),
}

impl Next {
    pub fn is_match(&self) -> bool {
        matches!(self, Next::Match(_))
    }
}
