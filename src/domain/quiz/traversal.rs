//! Traversal engine.
//!
//! Stateless: the caller carries the current step id between calls, and each
//! call follows exactly one edge `(step, answer) -> next step`.

use super::dataset::Dataset;
use super::errors::TraversalError;
use super::model::{Step, StepKind};
use super::views::{Next, QuestionView, ResultView};
use crate::domain::foundation::StepId;

/// Returns the question posed by the entry step.
pub fn begin(dataset: &Dataset) -> Result<QuestionView, TraversalError> {
    let entry = dataset.entry_step().ok_or(TraversalError::EmptyDataset)?;

    match present(dataset, entry)? {
        Next::Question(view) => Ok(view),
        Next::Match(_) => Err(TraversalError::Inconsistent { step: entry.id() }),
    }
}

/// Resolves an answer given at `step_id` to the next question or a match.
///
/// Checks run in order: the step id, then an empty answer, then whether the
/// answer is an edge of the step.
pub fn answer(dataset: &Dataset, step_id: i64, answer: &str) -> Result<Next, TraversalError> {
    let current = StepId::try_from(step_id)
        .ok()
        .and_then(|id| dataset.step(id))
        .ok_or(TraversalError::invalid_step(step_id))?;

    if answer.is_empty() {
        return Err(TraversalError::empty_answer(current.id()));
    }

    let next_id = current
        .next_for(answer)
        .ok_or_else(|| TraversalError::unknown_choice(current.id(), answer, accepted(dataset, current)))?;

    let next = dataset
        .step(next_id)
        .ok_or(TraversalError::Inconsistent { step: current.id() })?;

    present(dataset, next)
}

/// Maps a step to what the client sees when it lands there.
fn present(dataset: &Dataset, step: &Step) -> Result<Next, TraversalError> {
    match step.kind() {
        StepKind::Question { question_id, .. } => {
            let question = dataset
                .question(*question_id)
                .ok_or(TraversalError::Inconsistent { step: step.id() })?;
            Ok(Next::Question(QuestionView::new(step.id(), question)))
        }
        StepKind::Terminal { result_id } => {
            let result = dataset
                .result(*result_id)
                .ok_or(TraversalError::Inconsistent { step: step.id() })?;
            Ok(Next::Match(ResultView::from(result)))
        }
    }
}

/// Labels that lead somewhere from `step`, in the question's display order.
fn accepted(dataset: &Dataset, step: &Step) -> Vec<String> {
    match step.kind() {
        StepKind::Question {
            question_id,
            answers,
        } => dataset
            .question(*question_id)
            .map(|q| {
                q.choices()
                    .iter()
                    .filter(|c| answers.contains_key(c.as_str()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_else(|| answers.keys().cloned().collect()),
        StepKind::Terminal { .. } => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::{LoadOptions, RawDataset, RawQuestion, RawResult, RawStep};

    fn sid(n: u32) -> StepId {
        StepId::new(n).unwrap()
    }

    fn garden() -> Dataset {
        let raw = RawDataset::new(
            vec![RawQuestion::new(1, "Where are you?", ["courtyard", "hall"])],
            vec![
                RawStep::question(1, 1, [("courtyard", 2)]),
                RawStep::terminal(2, 1),
            ],
            vec![RawResult::new(1, "Garden", "You are outside.")],
        );
        Dataset::load(raw, &LoadOptions::default()).unwrap()
    }

    /// Animal triage: two levels of questions, three results.
    fn animals() -> Dataset {
        let raw = RawDataset::new(
            vec![
                RawQuestion::new(1, "Does it fly?", ["yes", "no"]),
                RawQuestion::new(2, "Does it swim?", ["yes", "no", "sometimes"]),
            ],
            vec![
                RawStep::question(1, 1, [("yes", 2), ("no", 3)]),
                RawStep::terminal(2, 1),
                RawStep::question(3, 2, [("yes", 4), ("no", 5), ("sometimes", 4)]),
                RawStep::terminal(4, 2),
                RawStep::terminal(5, 3),
            ],
            vec![
                RawResult::new(1, "Bird", "It has wings."),
                RawResult::new(2, "Fish", "It lives in water."),
                RawResult::new(3, "Dog", "It stays on land."),
            ],
        );
        Dataset::load(raw, &LoadOptions::default()).unwrap()
    }

    #[test]
    fn begin_returns_entry_question() {
        let view = begin(&garden()).unwrap();
        assert_eq!(
            view,
            QuestionView {
                step_id: sid(1),
                question: "Where are you?".to_string(),
                answers: vec!["courtyard".to_string(), "hall".to_string()],
            }
        );
    }

    #[test]
    fn begin_is_idempotent() {
        let dataset = animals();
        assert_eq!(begin(&dataset).unwrap(), begin(&dataset).unwrap());
    }

    #[test]
    fn answer_leading_to_terminal_step_returns_match() {
        let next = answer(&garden(), 1, "courtyard").unwrap();
        assert_eq!(
            next,
            Next::Match(ResultView {
                name: "Garden".to_string(),
                description: "You are outside.".to_string(),
            })
        );
    }

    #[test]
    fn answer_leading_to_question_step_is_tagged_with_that_step() {
        let next = answer(&animals(), 1, "no").unwrap();
        assert_eq!(
            next,
            Next::Question(QuestionView {
                step_id: sid(3),
                question: "Does it swim?".to_string(),
                answers: vec!["yes".into(), "no".into(), "sometimes".into()],
            })
        );
    }

    #[test]
    fn full_traversal_reaches_result() {
        let dataset = animals();
        let first = begin(&dataset).unwrap();
        let second = match answer(&dataset, i64::from(first.step_id.get()), "no").unwrap() {
            Next::Question(view) => view,
            other => panic!("expected a question, got {:?}", other),
        };
        let last = answer(&dataset, i64::from(second.step_id.get()), "sometimes").unwrap();
        assert_eq!(
            last,
            Next::Match(ResultView {
                name: "Fish".to_string(),
                description: "It lives in water.".to_string(),
            })
        );
    }

    #[test]
    fn unknown_step_is_invalid() {
        let dataset = garden();
        for step_id in [0, -1, 3, 1_000, i64::MAX] {
            assert_eq!(
                answer(&dataset, step_id, "courtyard").unwrap_err(),
                TraversalError::InvalidStep(step_id)
            );
        }
    }

    #[test]
    fn invalid_step_is_checked_before_empty_answer() {
        assert_eq!(
            answer(&garden(), 9, "").unwrap_err(),
            TraversalError::InvalidStep(9)
        );
    }

    #[test]
    fn empty_answer_is_rejected() {
        assert_eq!(
            answer(&garden(), 1, "").unwrap_err(),
            TraversalError::EmptyAnswer { step: sid(1) }
        );
    }

    #[test]
    fn choice_without_edge_is_unknown() {
        let err = answer(&garden(), 1, "hall").unwrap_err();
        assert_eq!(
            err,
            TraversalError::UnknownChoice {
                step: sid(1),
                answer: "hall".to_string(),
                accepted: vec!["courtyard".to_string()],
            }
        );
    }

    #[test]
    fn answers_are_case_sensitive() {
        assert!(matches!(
            answer(&garden(), 1, "Courtyard").unwrap_err(),
            TraversalError::UnknownChoice { .. }
        ));
    }

    #[test]
    fn accepted_answers_follow_display_order() {
        let err = answer(&animals(), 3, "maybe").unwrap_err();
        match err {
            TraversalError::UnknownChoice { accepted, .. } => {
                assert_eq!(accepted, vec!["yes", "no", "sometimes"]);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn answering_a_terminal_step_is_unknown_choice() {
        let err = answer(&garden(), 2, "courtyard").unwrap_err();
        assert_eq!(
            err,
            TraversalError::UnknownChoice {
                step: sid(2),
                answer: "courtyard".to_string(),
                accepted: vec![],
            }
        );
    }

    #[test]
    fn cyclic_dataset_can_loop() {
        let raw = RawDataset::new(
            vec![RawQuestion::new(1, "Again?", ["again", "stop"])],
            vec![
                RawStep::question(1, 1, [("again", 1), ("stop", 2)]),
                RawStep::terminal(2, 1),
            ],
            vec![RawResult::new(1, "Stopped", "You stopped.")],
        );
        let dataset = Dataset::load(raw, &LoadOptions::default()).unwrap();
        for _ in 0..3 {
            let next = answer(&dataset, 1, "again").unwrap();
            assert!(matches!(next, Next::Question(ref v) if v.step_id == sid(1)));
        }
        assert!(answer(&dataset, 1, "stop").unwrap().is_match());
    }
}
