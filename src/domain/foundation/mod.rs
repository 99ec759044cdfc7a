//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and error vocabulary used by the quiz domain.

mod errors;
mod ids;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{QuestionId, ResultId, StepId};
