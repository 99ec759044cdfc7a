//! Quiz domain module.
//!
//! A quiz is a directed graph of steps. A question step poses a question and
//! maps each answer label to the next step; a terminal step points at a result.
//!
//! - `raw` - The document shape handed over by a dataset source
//! - `dataset` - Load-time validation into an immutable [`Dataset`]
//! - `graph` - Cycle and reachability analysis
//! - `traversal` - [`begin`] and [`answer`], the per-request operations

mod dataset;
mod errors;
mod graph;
mod model;
mod raw;
mod traversal;
mod views;

pub use dataset::{Dataset, LoadOptions};
pub use errors::{DatasetError, Locator, TraversalError};
pub use graph::GraphReport;
pub use model::{EntityKind, Question, QuizResult, Step, StepKind};
pub use raw::{RawDataset, RawQuestion, RawResult, RawStep};
pub use traversal::{answer, begin};
pub use views::{Next, QuestionView, ResultView};
