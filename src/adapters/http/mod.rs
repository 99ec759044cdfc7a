//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `app` assembles them with the shared middleware stack.

pub mod app;
pub mod quiz;

// Re-export key types for convenience
pub use app::app_router;
pub use quiz::quiz_router;
pub use quiz::QuizAppState;
