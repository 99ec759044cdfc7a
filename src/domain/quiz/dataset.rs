//! Dataset - the validated, immutable decision graph.
//!
//! Built once from a [`RawDataset`]. Every cross-reference is resolved during
//! [`Dataset::load`], so traversal never meets a dangling id.

use std::collections::{BTreeMap, HashMap};

use super::errors::{DatasetError, Locator};
use super::graph::{self, GraphReport};
use super::model::{EntityKind, Question, QuizResult, Step, StepKind};
use super::raw::{RawDataset, RawQuestion, RawResult, RawStep};
use crate::domain::foundation::{QuestionId, ResultId, StepId};

/// Options applied while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Treat a cycle in the step graph as a load failure.
    pub reject_cycles: bool,
}

/// Validated questions, steps and results.
#[derive(Debug, Clone)]
pub struct Dataset {
    questions: HashMap<QuestionId, Question>,
    steps: BTreeMap<StepId, Step>,
    results: HashMap<ResultId, QuizResult>,
    entry: StepId,
    report: GraphReport,
}

impl Dataset {
    /// Validates a raw document and freezes it.
    ///
    /// # Errors
    ///
    /// Returns the first structural problem found, checking in order:
    /// empty collections, questions, results, step ids, step references,
    /// the entry step, and (if requested) cycles.
    pub fn load(raw: RawDataset, options: &LoadOptions) -> Result<Self, DatasetError> {
        if raw.questions.is_empty() {
            return Err(DatasetError::EmptyCollection(EntityKind::Question));
        }
        if raw.steps.is_empty() {
            return Err(DatasetError::EmptyCollection(EntityKind::Step));
        }
        if raw.results.is_empty() {
            return Err(DatasetError::EmptyCollection(EntityKind::Result));
        }

        let questions = load_questions(raw.questions)?;
        let results = load_results(raw.results)?;
        let steps = load_steps(raw.steps, &questions, &results)?;
        let entry = resolve_entry(raw.entry_step, &steps)?;

        let report = graph::analyze(entry, &steps);
        if options.reject_cycles {
            if let Some(path) = &report.cycle {
                return Err(DatasetError::CycleDetected { path: path.clone() });
            }
        }

        Ok(Self {
            questions,
            steps,
            results,
            entry,
            report,
        })
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(&id)
    }

    pub fn step(&self, id: StepId) -> Option<&Step> {
        self.steps.get(&id)
    }

    pub fn result(&self, id: ResultId) -> Option<&QuizResult> {
        self.results.get(&id)
    }

    /// Identifier of the step every traversal starts from.
    pub fn entry_step_id(&self) -> StepId {
        self.entry
    }

    pub fn entry_step(&self) -> Option<&Step> {
        self.steps.get(&self.entry)
    }

    /// Steps in ascending id order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.values()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Cycle and reachability findings computed at load.
    pub fn graph_report(&self) -> &GraphReport {
        &self.report
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Field helpers
// ════════════════════════════════════════════════════════════════════════════

/// Reads a declared identifier. Zero counts as absent.
fn required_id(
    value: Option<i64>,
    kind: EntityKind,
    at: Locator,
    field: &'static str,
) -> Result<i64, DatasetError> {
    match value {
        None | Some(0) => Err(DatasetError::MissingRequiredField { kind, at, field }),
        Some(v) if v < 0 || v > i64::from(u32::MAX) => Err(DatasetError::InvalidIdentifier {
            kind,
            at,
            field,
            value: v,
        }),
        Some(v) => Ok(v),
    }
}

fn required_text(
    value: Option<String>,
    kind: EntityKind,
    at: Locator,
    field: &'static str,
) -> Result<String, DatasetError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(DatasetError::MissingRequiredField { kind, at, field }),
    }
}

/// Locates an entity by its id when it has one, otherwise by position.
fn locate(id: Option<i64>, index: usize) -> Locator {
    match id {
        Some(id) if id != 0 => Locator::Id(id),
        _ => Locator::Position(index + 1),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Collections
// ════════════════════════════════════════════════════════════════════════════

fn load_questions(raw: Vec<RawQuestion>) -> Result<HashMap<QuestionId, Question>, DatasetError> {
    let kind = EntityKind::Question;
    let mut questions = HashMap::with_capacity(raw.len());

    for (index, q) in raw.into_iter().enumerate() {
        let at = locate(q.id, index);
        let id = required_id(q.id, kind, at, "id")?;
        let prompt = required_text(q.question, kind, at, "question")?;
        let choices = match q.validation {
            Some(choices) if !choices.is_empty() => choices,
            _ => {
                return Err(DatasetError::MissingRequiredField {
                    kind,
                    at,
                    field: "validation",
                })
            }
        };
        if choices.iter().any(|c| c.is_empty()) {
            return Err(DatasetError::MissingRequiredField {
                kind,
                at,
                field: "validation",
            });
        }

        let id = to_question_id(id, at)?;
        if questions.contains_key(&id) {
            return Err(DatasetError::DuplicateId {
                kind,
                id: i64::from(id.get()),
            });
        }
        questions.insert(
            id,
            Question {
                id,
                prompt,
                choices,
            },
        );
    }

    Ok(questions)
}

fn load_results(raw: Vec<RawResult>) -> Result<HashMap<ResultId, QuizResult>, DatasetError> {
    let kind = EntityKind::Result;
    let mut results = HashMap::with_capacity(raw.len());

    for (index, r) in raw.into_iter().enumerate() {
        let at = locate(r.id, index);
        let id = required_id(r.id, kind, at, "id")?;
        let name = required_text(r.name, kind, at, "name")?;
        let description = required_text(r.description, kind, at, "description")?;

        let id = ResultId::try_from(id).map_err(|_| DatasetError::InvalidIdentifier {
            kind,
            at,
            field: "id",
            value: id,
        })?;
        if results.contains_key(&id) {
            return Err(DatasetError::DuplicateId {
                kind,
                id: i64::from(id.get()),
            });
        }
        results.insert(
            id,
            QuizResult {
                id,
                name,
                description,
            },
        );
    }

    Ok(results)
}

/// Steps are loaded in two passes: ids first, so answer targets can be
/// checked against the complete set, then kinds and references.
fn load_steps(
    raw: Vec<RawStep>,
    questions: &HashMap<QuestionId, Question>,
    results: &HashMap<ResultId, QuizResult>,
) -> Result<BTreeMap<StepId, Step>, DatasetError> {
    let kind = EntityKind::Step;
    let mut declared: BTreeMap<StepId, RawStep> = BTreeMap::new();

    for (index, s) in raw.into_iter().enumerate() {
        let at = locate(s.id, index);
        let id = required_id(s.id, kind, at, "id")?;
        let id = StepId::try_from(id).map_err(|_| DatasetError::InvalidIdentifier {
            kind,
            at,
            field: "id",
            value: id,
        })?;
        if declared.contains_key(&id) {
            return Err(DatasetError::DuplicateId {
                kind,
                id: i64::from(id.get()),
            });
        }
        declared.insert(id, s);
    }

    let mut steps = BTreeMap::new();
    for (&id, s) in &declared {
        let step_kind = resolve_step_kind(id, s, &declared, questions, results)?;
        steps.insert(id, Step { id, kind: step_kind });
    }

    Ok(steps)
}

fn resolve_step_kind(
    id: StepId,
    s: &RawStep,
    declared: &BTreeMap<StepId, RawStep>,
    questions: &HashMap<QuestionId, Question>,
    results: &HashMap<ResultId, QuizResult>,
) -> Result<StepKind, DatasetError> {
    let kind = EntityKind::Step;
    let at = Locator::Id(i64::from(id.get()));
    let has_result = matches!(s.result_id, Some(v) if v != 0);
    let has_question = matches!(s.question_id, Some(v) if v != 0) || s.answers.is_some();

    match (has_question, has_result) {
        (true, true) => Err(DatasetError::ConflictingStepKind { step: id }),
        (false, false) => Err(DatasetError::MissingRequiredField {
            kind,
            at,
            field: "question_id or result_id",
        }),
        (false, true) => {
            let target = required_id(s.result_id, kind, at, "result_id")?;
            let result_id = ResultId::try_from(target)
                .ok()
                .filter(|rid| results.contains_key(rid))
                .ok_or(DatasetError::InvalidReference {
                    step: id,
                    field: "result_id",
                    target_kind: EntityKind::Result,
                    target,
                })?;
            Ok(StepKind::Terminal { result_id })
        }
        (true, false) => {
            let target = required_id(s.question_id, kind, at, "question_id")?;
            let question = QuestionId::try_from(target)
                .ok()
                .and_then(|qid| questions.get(&qid))
                .ok_or(DatasetError::InvalidReference {
                    step: id,
                    field: "question_id",
                    target_kind: EntityKind::Question,
                    target,
                })?;

            let raw_answers = match &s.answers {
                Some(answers) if !answers.is_empty() => answers,
                _ => {
                    return Err(DatasetError::MissingRequiredField {
                        kind,
                        at,
                        field: "answers",
                    })
                }
            };

            let mut answers = BTreeMap::new();
            for (label, &next) in raw_answers {
                if !question.choices().iter().any(|c| c == label) {
                    return Err(DatasetError::UnmatchedAnswerLabel {
                        step: id,
                        question: question.id(),
                        label: label.clone(),
                    });
                }
                let next_id = StepId::try_from(next)
                    .ok()
                    .filter(|sid| declared.contains_key(sid))
                    .ok_or(DatasetError::InvalidReference {
                        step: id,
                        field: "answers",
                        target_kind: EntityKind::Step,
                        target: next,
                    })?;
                answers.insert(label.clone(), next_id);
            }

            Ok(StepKind::Question {
                question_id: question.id(),
                answers,
            })
        }
    }
}

fn to_question_id(id: i64, at: Locator) -> Result<QuestionId, DatasetError> {
    QuestionId::try_from(id).map_err(|_| DatasetError::InvalidIdentifier {
        kind: EntityKind::Question,
        at,
        field: "id",
        value: id,
    })
}

fn resolve_entry(
    declared: Option<i64>,
    steps: &BTreeMap<StepId, Step>,
) -> Result<StepId, DatasetError> {
    let (raw_id, step) = match declared {
        Some(raw_id) => {
            let step = StepId::try_from(raw_id)
                .ok()
                .and_then(|id| steps.get(&id))
                .ok_or(DatasetError::InvalidEntryStep {
                    step: raw_id,
                    reason: "no step has this id",
                })?;
            (raw_id, step)
        }
        None => {
            let step = steps
                .values()
                .next()
                .ok_or(DatasetError::EmptyCollection(EntityKind::Step))?;
            (i64::from(step.id().get()), step)
        }
    };

    if step.is_terminal() {
        return Err(DatasetError::InvalidEntryStep {
            step: raw_id,
            reason: "it is a result step, not a question",
        });
    }

    Ok(step.id())
}
