//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Loading runs once at startup; begin/answer run per request against the
//! shared, read-only dataset.

pub mod handlers;

pub use handlers::{
    BeginQuizHandler, LoadDatasetHandler, StartupError, SubmitAnswerCommand, SubmitAnswerHandler,
};
