//! Composite actions.
//!
//! Composites own an ordered list of child actions (exclusive ownership,
//! exactly one parent) and drive them under one of two composition rules:
//! [`SequentialAction`] (strict order, no overlap) and [`ParallelAction`]
//! (fair round-robin interleaving, one pass per tick).

use stage_core::Stage;

use crate::{Action, Step, StepError};

/// Runs children strictly in order.
///
/// # Semantics
///
/// One resumption resumes the current child once and forwards its progress
/// notes unchanged. A child's completion is not a suspension point: when the
/// current child finishes, the cursor advances and the next child is resumed
/// within the same tick, until some child yields or all children are done.
/// Child terminal notes are dropped; the sequential finishes with its own
/// `"seq end"` terminal once the last child completes. An empty child list
/// completes on the first resumption.
#[derive(Debug)]
pub struct SequentialAction {
    children: Vec<Box<dyn Action>>,
    cursor: usize,
    finished: bool,
}

impl SequentialAction {
    pub const KIND: &'static str = "sequential";

    pub fn new(children: Vec<Box<dyn Action>>) -> Self {
        Self {
            children,
            cursor: 0,
            finished: false,
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Action for SequentialAction {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn finished(&self) -> bool {
        self.finished
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.finished = false;
        for child in &mut self.children {
            child.reset();
        }
    }

    fn step(&mut self, stage: &mut Stage) -> Result<Step, StepError> {
        assert!(!self.finished, "sequential resumed after completion");

        loop {
            let Some(child) = self.children.get_mut(self.cursor) else {
                self.finished = true;
                return Ok(Step::Done(Some("seq end".into())));
            };

            match child.step(stage)? {
                Step::Yielded(notes) => return Ok(Step::Yielded(notes)),
                // Child terminal notes are not forwarded; roll into the
                // next child in the same tick.
                Step::Done(_) => self.cursor += 1,
            }
        }
    }
}

/// Runs children concurrently under cooperative interleaving.
///
/// # Semantics
///
/// Maintains a live set, initially every child. One resumption performs one
/// cooperative pass: each still-live child is resumed exactly once, in list
/// order. A child that completes is removed from the live set (its terminal
/// note is not forwarded); the notes of every child that yields are
/// surfaced together, in child order, as this tick's batch. The pass that
/// empties the live set finishes the parallel with its `"para end"`
/// terminal in the same resumption. Every live child is resumed once per
/// pass regardless of the others' progress, so no child starves.
#[derive(Debug)]
pub struct ParallelAction {
    children: Vec<Box<dyn Action>>,
    live: Vec<usize>,
    finished: bool,
}

impl ParallelAction {
    pub const KIND: &'static str = "parallel";

    pub fn new(children: Vec<Box<dyn Action>>) -> Self {
        let live = (0..children.len()).collect();
        Self {
            children,
            live,
            finished: false,
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children still in the live set.
    pub fn live_children(&self) -> usize {
        self.live.len()
    }
}

impl Action for ParallelAction {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn finished(&self) -> bool {
        self.finished
    }

    fn reset(&mut self) {
        self.live = (0..self.children.len()).collect();
        self.finished = false;
        for child in &mut self.children {
            child.reset();
        }
    }

    fn step(&mut self, stage: &mut Stage) -> Result<Step, StepError> {
        assert!(!self.finished, "parallel resumed after completion");

        let mut notes = Vec::new();
        let mut i = 0;
        while i < self.live.len() {
            let child = &mut self.children[self.live[i]];
            match child.step(stage)? {
                Step::Yielded(mut child_notes) => {
                    notes.append(&mut child_notes);
                    i += 1;
                }
                // Completed children leave the live set and are never
                // resumed again. Linear removal keeps pass order intact.
                Step::Done(_) => {
                    self.live.remove(i);
                }
            }
        }

        if self.live.is_empty() {
            // A pass only empties the live set when every remaining child
            // returned Done, so no yielded notes can be lost here.
            debug_assert!(notes.is_empty(), "yielding children must stay live");
            self.finished = true;
            return Ok(Step::Done(Some("para end".into())));
        }

        Ok(Step::Yielded(notes))
    }
}

#[cfg(test)]
mod tests {
    use crate::CounterAction;

    use super::*;

    fn stage() -> Stage {
        Stage::builder().build()
    }

    fn boxed(count: u64) -> Box<dyn Action> {
        Box::new(CounterAction::new(count))
    }

    fn drive(action: &mut dyn Action, stage: &mut Stage) -> (Vec<String>, usize) {
        let mut notes = Vec::new();
        for resumption in 1..=1000 {
            match action.step(stage).unwrap() {
                Step::Yielded(mut n) => notes.append(&mut n),
                Step::Done(_) => return (notes, resumption),
            }
        }
        panic!("action did not complete");
    }

    #[test]
    fn sequential_runs_children_in_order() {
        let mut stage = stage();
        let mut seq = SequentialAction::new(vec![boxed(2), boxed(1)]);

        let (notes, _) = drive(&mut seq, &mut stage);

        assert_eq!(notes, vec!["num 1/2", "num 2/2", "num 1/1"]);
        assert!(seq.finished());
    }

    #[test]
    fn sequential_rolls_into_next_child_on_completion() {
        let mut stage = stage();
        let mut seq = SequentialAction::new(vec![boxed(1), boxed(1)]);

        // Tick 1: first child's only note.
        assert_eq!(seq.step(&mut stage).unwrap().notes(), ["num 1/1".to_owned()]);
        // Tick 2: first child completes, second child yields in the same tick.
        assert_eq!(seq.step(&mut stage).unwrap().notes(), ["num 1/1".to_owned()]);
        // Tick 3: second child completes, sequential finishes.
        let step = seq.step(&mut stage).unwrap();
        assert_eq!(step, Step::Done(Some("seq end".into())));
    }

    #[test]
    fn sequential_with_no_children_completes_at_once() {
        let mut stage = stage();
        let mut seq = SequentialAction::new(Vec::new());
        assert!(seq.step(&mut stage).unwrap().is_done());
    }

    #[test]
    fn parallel_interleaves_fairly() {
        let mut stage = stage();
        let mut par = ParallelAction::new(vec![boxed(1), boxed(3)]);

        // Pass 1: both children yield, in list order.
        let step = par.step(&mut stage).unwrap();
        assert_eq!(step.notes(), ["num 1/1".to_owned(), "num 1/3".to_owned()]);
        assert_eq!(par.live_children(), 2);

        // Pass 2: first child completes and leaves the live set.
        let step = par.step(&mut stage).unwrap();
        assert_eq!(step.notes(), ["num 2/3".to_owned()]);
        assert_eq!(par.live_children(), 1);

        // Pass 3: only the long counter remains.
        let step = par.step(&mut stage).unwrap();
        assert_eq!(step.notes(), ["num 3/3".to_owned()]);

        // Pass 4: last child completes; the node finishes in the same pass.
        let step = par.step(&mut stage).unwrap();
        assert_eq!(step, Step::Done(Some("para end".into())));
        assert!(par.finished());
    }

    #[test]
    fn parallel_ticks_to_completion_is_max_of_children() {
        let mut stage = stage();

        // A counter of n completes on resumption n + 1.
        let mut par = ParallelAction::new(vec![boxed(2), boxed(5), boxed(3)]);
        let (_, resumptions) = drive(&mut par, &mut stage);
        assert_eq!(resumptions, 6);
    }

    #[test]
    fn parallel_completes_iff_all_children_complete() {
        let mut stage = stage();
        let mut par = ParallelAction::new(vec![boxed(1), boxed(2)]);

        while !par.finished() {
            par.step(&mut stage).unwrap();
        }
        assert_eq!(par.live_children(), 0);
    }

    #[test]
    fn empty_parallel_completes_at_once() {
        let mut stage = stage();
        let mut par = ParallelAction::new(Vec::new());
        assert!(par.step(&mut stage).unwrap().is_done());
    }

    #[test]
    fn reset_restores_the_live_set() {
        let mut stage = stage();
        let mut par = ParallelAction::new(vec![boxed(1)]);

        drive(&mut par, &mut stage);
        assert!(par.finished());

        par.reset();
        assert!(!par.finished());
        assert_eq!(par.live_children(), 1);
        let (notes, _) = drive(&mut par, &mut stage);
        assert_eq!(notes, vec!["num 1/1"]);
    }

    #[test]
    fn nested_composites_preserve_ordering() {
        let mut stage = stage();
        let inner = SequentialAction::new(vec![boxed(1), boxed(1)]);
        let mut par = ParallelAction::new(vec![Box::new(inner), boxed(2)]);

        let (notes, _) = drive(&mut par, &mut stage);

        // Sequential child yields 1/1 twice (rolling over between its
        // counters); the sibling counter interleaves per pass.
        assert_eq!(notes, vec!["num 1/1", "num 1/2", "num 1/1", "num 2/2"]);
    }
}
