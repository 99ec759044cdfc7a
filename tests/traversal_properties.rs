//! Property tests for the traversal engine over generated acyclic quizzes.
//!
//! Generated quizzes have question steps `1..=n`, each routing its answers to
//! a later question step or to one of the terminal steps `n+1..=n+r`.

use proptest::prelude::*;

use tree_match::domain::foundation::StepId;
use tree_match::domain::quiz::{
    answer, begin, Dataset, LoadOptions, Next, RawDataset, RawQuestion, RawResult, RawStep,
    StepKind, TraversalError,
};

#[derive(Debug, Clone)]
struct QuizShape {
    results: u32,
    /// Per question step: one routing seed per choice.
    edges: Vec<Vec<u32>>,
}

fn quiz_shape() -> impl Strategy<Value = QuizShape> {
    (1u32..4, prop::collection::vec(prop::collection::vec(any::<u32>(), 1..4), 1..8))
        .prop_map(|(results, edges)| QuizShape { results, edges })
}

fn build(shape: &QuizShape) -> RawDataset {
    let n = shape.edges.len() as u32;
    let mut questions = Vec::new();
    let mut steps = Vec::new();

    for (index, seeds) in shape.edges.iter().enumerate() {
        let id = index as u32 + 1;
        let choices: Vec<String> = (0..seeds.len()).map(|k| format!("q{}-choice{}", id, k)).collect();
        let answers: Vec<(String, i64)> = choices
            .iter()
            .zip(seeds)
            .map(|(label, seed)| {
                let later = n - id;
                let target = if later > 0 && seed % 2 == 0 {
                    id + 1 + (seed / 2) % later
                } else {
                    n + 1 + seed % shape.results
                };
                (label.clone(), i64::from(target))
            })
            .collect();

        questions.push(RawQuestion::new(i64::from(id), format!("Question {}?", id), choices));
        steps.push(RawStep::question(i64::from(id), i64::from(id), answers));
    }

    let mut results = Vec::new();
    for r in 1..=shape.results {
        steps.push(RawStep::terminal(i64::from(n + r), i64::from(r)));
        results.push(RawResult::new(
            i64::from(r),
            format!("Result {}", r),
            format!("Description {}", r),
        ));
    }

    RawDataset::new(questions, steps, results)
}

fn load(shape: &QuizShape) -> Dataset {
    let options = LoadOptions {
        reject_cycles: true,
    };
    Dataset::load(build(shape), &options).expect("generated quiz must be valid")
}

proptest! {
    #[test]
    fn every_mapped_answer_resolves_to_its_target(shape in quiz_shape()) {
        let dataset = load(&shape);

        for step in dataset.steps() {
            let StepKind::Question { answers, .. } = step.kind() else { continue };
            for (label, target) in answers {
                let next = answer(&dataset, i64::from(step.id().get()), label);
                let target_step = dataset.step(*target).unwrap();

                match (next, target_step.kind()) {
                    (Ok(Next::Match(view)), StepKind::Terminal { result_id }) => {
                        let result = dataset.result(*result_id).unwrap();
                        prop_assert_eq!(view.name.as_str(), result.name());
                        prop_assert_eq!(view.description.as_str(), result.description());
                    }
                    (Ok(Next::Question(view)), StepKind::Question { question_id, .. }) => {
                        let question = dataset.question(*question_id).unwrap();
                        prop_assert_eq!(view.step_id, *target);
                        prop_assert_eq!(view.question.as_str(), question.prompt());
                        prop_assert_eq!(view.answers.as_slice(), question.choices());
                    }
                    (other, kind) => {
                        prop_assert!(false, "answer gave {:?} for target {:?}", other, kind);
                    }
                }
            }
        }
    }

    #[test]
    fn begin_is_idempotent(shape in quiz_shape()) {
        let dataset = load(&shape);
        let first = begin(&dataset).unwrap();
        prop_assert_eq!(first.step_id, StepId::new(1).unwrap());
        prop_assert_eq!(first, begin(&dataset).unwrap());
    }

    #[test]
    fn out_of_range_step_ids_are_invalid(shape in quiz_shape(), offset in 1i64..1_000) {
        let dataset = load(&shape);
        let total = dataset.step_count() as i64;

        for step_id in [0, -offset, total + offset] {
            let err = answer(&dataset, step_id, "q1-choice0").unwrap_err();
            prop_assert_eq!(err, TraversalError::InvalidStep(step_id));
        }
    }

    #[test]
    fn labels_outside_the_answer_map_are_unknown(shape in quiz_shape(), label in "[A-Z]{1,8}") {
        let dataset = load(&shape);

        for step in dataset.steps() {
            let err = answer(&dataset, i64::from(step.id().get()), &label).unwrap_err();
            let is_unknown = matches!(err, TraversalError::UnknownChoice { .. });
            prop_assert!(is_unknown);
        }
    }

    #[test]
    fn any_walk_reaches_a_match(shape in quiz_shape(), picks in prop::collection::vec(any::<usize>(), 8)) {
        let dataset = load(&shape);
        let mut view = begin(&dataset).unwrap();

        for pick in picks.iter().cycle().take(dataset.step_count()) {
            let choice = view.answers[pick % view.answers.len()].clone();
            match answer(&dataset, i64::from(view.step_id.get()), &choice).unwrap() {
                Next::Match(_) => return Ok(()),
                Next::Question(next) => view = next,
            }
        }
        prop_assert!(false, "walk did not terminate");
    }
}
