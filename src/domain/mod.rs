//! Domain layer containing the decision graph and its traversal.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, error codes)
//! - `quiz` - Dataset model, load-time validation, graph analysis and traversal

pub mod foundation;
pub mod quiz;
