//! Application router with middleware.

use std::time::Duration;

use axum::Router;
use ::http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::quiz::{quiz_router, QuizAppState};
use crate::config::ServerConfig;

/// Builds the full HTTP application: quiz routes, tracing, timeout and CORS.
pub fn app_router(state: QuizAppState, server: &ServerConfig) -> Router {
    quiz_router()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(&server.cors_origins_list()))
        .with_state(state)
}

/// Any origin when none are configured, otherwise exactly the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    layer.allow_origin(origins)
}
