//! Axum router configuration for quiz endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{answer, begin, health, QuizAppState};

/// Create the quiz API router.
///
/// # Routes
///
/// - `GET /begin` - First question
/// - `POST /answer` - Submit `{step_id, answer}`, get the next question or a match
pub fn quiz_routes() -> Router<QuizAppState> {
    Router::new()
        .route("/begin", get(begin))
        .route("/answer", post(answer))
}

/// Create the complete quiz module router, mounted at `/api` plus `/health`.
pub fn quiz_router() -> Router<QuizAppState> {
    Router::new()
        .nest("/api", quiz_routes())
        .route("/health", get(health))
}
