//! HTTP adapter for quiz endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnswerRequest, ErrorResponse, HealthResponse, MatchResponse, QuestionResponse, QuizResponse,
};
pub use handlers::QuizAppState;
pub use routes::{quiz_router, quiz_routes};
