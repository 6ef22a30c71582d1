//! Counting leaf action.

use stage_core::Stage;

use crate::{Action, Step, StepError};

/// Yields a numbered progress note `count` times, then completes.
///
/// Resumption `i` (1-indexed) yields `"num i/count"`. The resumption after
/// the last one completes with the terminal note `"num end count"`, so a
/// counter takes `count + 1` resumptions in total. `count == 0` completes
/// on the first resumption without yielding anything.
///
/// Mostly useful as a deterministic pacing/test action: its resumption
/// count is exact, which makes interleaving properties checkable.
#[derive(Debug, Clone)]
pub struct CounterAction {
    count: u64,
    emitted: u64,
    finished: bool,
}

impl CounterAction {
    pub const KIND: &'static str = "counter";

    pub fn new(count: u64) -> Self {
        Self {
            count,
            emitted: 0,
            finished: false,
        }
    }
}

impl Action for CounterAction {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn finished(&self) -> bool {
        self.finished
    }

    fn reset(&mut self) {
        self.emitted = 0;
        self.finished = false;
    }

    fn step(&mut self, _stage: &mut Stage) -> Result<Step, StepError> {
        assert!(!self.finished, "counter resumed after completion");

        if self.emitted < self.count {
            self.emitted += 1;
            Ok(Step::note(format!("num {}/{}", self.emitted, self.count)))
        } else {
            self.finished = true;
            Ok(Step::Done(Some(format!("num end {}", self.count))))
        }
    }
}
