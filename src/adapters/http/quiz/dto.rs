//! HTTP DTOs for quiz endpoints.
//!
//! These types fix the wire shape independently of the domain views.

use serde::{Deserialize, Serialize};

use crate::domain::quiz::{Next, QuestionView, ResultView};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/answer`.
///
/// Missing fields default to `0` and `""` so they surface as an invalid step
/// or an empty answer with a useful message.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub step_id: i64,
    #[serde(default)]
    pub answer: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A question and the step to answer it against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub step_id: u32,
    pub question: String,
    pub answers: Vec<String>,
}

impl From<QuestionView> for QuestionResponse {
    fn from(view: QuestionView) -> Self {
        Self {
            step_id: view.step_id.get(),
            question: view.question,
            answers: view.answers,
        }
    }
}

/// A terminal match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub name: String,
    pub description: String,
}

impl From<ResultView> for MatchResponse {
    fn from(view: ResultView) -> Self {
        Self {
            name: view.name,
            description: view.description,
        }
    }
}

/// `{"question": {...}}` or `{"match": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuizResponse {
    Question { question: QuestionResponse },
    Match {
        #[serde(rename = "match")]
        matched: MatchResponse,
    },
}

impl From<QuestionView> for QuizResponse {
    fn from(view: QuestionView) -> Self {
        QuizResponse::Question {
            question: view.into(),
        }
    }
}

impl From<Next> for QuizResponse {
    fn from(next: Next) -> Self {
        match next {
            Next::Question(view) => view.into(),
            Next::Match(view) => QuizResponse::Match {
                matched: view.into(),
            },
        }
    }
}

/// Dataset summary for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub questions: usize,
    pub steps: usize,
    pub results: usize,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}
