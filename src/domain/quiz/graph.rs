//! Structural analysis of the step graph.
//!
//! Cycles are legal in the data model. This pass only reports them; whether a
//! cycle is fatal is decided by the loader's options.

use std::collections::{BTreeMap, HashMap};

use super::model::Step;
use crate::domain::foundation::StepId;

/// Findings of a depth-first walk over the step graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphReport {
    /// First cycle found, as a path that starts and ends on the same step.
    pub cycle: Option<Vec<StepId>>,
    /// Steps that cannot be reached from the entry step, in id order.
    pub unreachable: Vec<StepId>,
}

impl GraphReport {
    pub fn is_acyclic(&self) -> bool {
        self.cycle.is_none()
    }

    pub fn is_clean(&self) -> bool {
        self.is_acyclic() && self.unreachable.is_empty()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Walks the graph from `entry`, then from every step the entry cannot reach,
/// so cycles in detached parts are reported too.
pub fn analyze(entry: StepId, steps: &BTreeMap<StepId, Step>) -> GraphReport {
    let mut marks: HashMap<StepId, Mark> = HashMap::with_capacity(steps.len());

    let mut cycle = walk(entry, steps, &mut marks);

    let unreachable: Vec<StepId> = steps
        .keys()
        .filter(|id| !marks.contains_key(id))
        .copied()
        .collect();

    for id in &unreachable {
        let found = walk(*id, steps, &mut marks);
        if cycle.is_none() {
            cycle = found;
        }
    }

    GraphReport { cycle, unreachable }
}

/// Iterative DFS with an explicit path stack. Returns the first back edge
/// found as a closed path.
fn walk(
    start: StepId,
    steps: &BTreeMap<StepId, Step>,
    marks: &mut HashMap<StepId, Mark>,
) -> Option<Vec<StepId>> {
    if marks.contains_key(&start) {
        return None;
    }

    let mut cycle = None;
    let mut path = vec![start];
    let mut frames = vec![successors(steps, start)];
    marks.insert(start, Mark::Visiting);

    loop {
        let Some(frame) = frames.last_mut() else {
            break;
        };

        match frame.next() {
            Some(next) => match marks.get(&next) {
                Some(Mark::Visiting) => {
                    if cycle.is_none() {
                        let from = path.iter().position(|id| *id == next).unwrap_or(0);
                        let mut found = path[from..].to_vec();
                        found.push(next);
                        cycle = Some(found);
                    }
                }
                Some(Mark::Done) => {}
                None => {
                    marks.insert(next, Mark::Visiting);
                    path.push(next);
                    frames.push(successors(steps, next));
                }
            },
            None => {
                frames.pop();
                if let Some(done) = path.pop() {
                    marks.insert(done, Mark::Done);
                }
            }
        }
    }

    cycle
}

fn successors(steps: &BTreeMap<StepId, Step>, id: StepId) -> std::vec::IntoIter<StepId> {
    steps
        .get(&id)
        .map(|step| step.successors().collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter()
}
