//! HTTP handlers for quiz endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::quiz::{
    BeginQuizHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
use crate::domain::foundation::ErrorCode;
use crate::domain::quiz::{Dataset, TraversalError};

use super::dto::{AnswerRequest, ErrorResponse, HealthResponse, QuizResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for quiz endpoints. Cloning only bumps reference counts.
#[derive(Clone)]
pub struct QuizAppState {
    dataset: Arc<Dataset>,
    begin_handler: Arc<BeginQuizHandler>,
    submit_handler: Arc<SubmitAnswerHandler>,
}

impl QuizAppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            begin_handler: Arc::new(BeginQuizHandler::new(dataset.clone())),
            submit_handler: Arc::new(SubmitAnswerHandler::new(dataset.clone())),
            dataset,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/begin - First question of the quiz
pub async fn begin(State(state): State<QuizAppState>) -> Response {
    match state.begin_handler.handle() {
        Ok(view) => (StatusCode::OK, Json(QuizResponse::from(view))).into_response(),
        Err(e) => handle_traversal_error(e),
    }
}

/// POST /api/answer - Submit an answer for a step
pub async fn answer(
    State(state): State<QuizAppState>,
    body: Result<Json<AnswerRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(format!(
                    "Invalid request body ({}): send {{\"step_id\": <number>, \"answer\": <string>}}",
                    rejection.body_text()
                ))),
            )
                .into_response()
        }
    };

    let cmd = SubmitAnswerCommand {
        step_id: req.step_id,
        answer: req.answer,
    };

    match state.submit_handler.handle(cmd) {
        Ok(next) => (StatusCode::OK, Json(QuizResponse::from(next))).into_response(),
        Err(e) => handle_traversal_error(e),
    }
}

/// GET /health - Liveness plus dataset size
pub async fn health(State(state): State<QuizAppState>) -> Response {
    let dataset = state.dataset();
    let response = HealthResponse {
        status: "ok".to_string(),
        questions: dataset.question_count(),
        steps: dataset.step_count(),
        results: dataset.result_count(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_traversal_error(error: TraversalError) -> Response {
    let status = match error.code() {
        ErrorCode::InvalidStep => StatusCode::NOT_FOUND,
        ErrorCode::EmptyAnswer | ErrorCode::UnknownChoice | ErrorCode::ValidationFailed => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::EmptyDataset => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => {
            tracing::error!("Traversal failed on validated dataset: {}", error);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponse::new(error.code(), error.message())),
    )
        .into_response()
}
