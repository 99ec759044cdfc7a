//! Quiz command and query handlers.

mod begin_quiz;
mod load_dataset;
mod submit_answer;

pub use begin_quiz::BeginQuizHandler;
pub use load_dataset::{LoadDatasetHandler, StartupError};
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler};
