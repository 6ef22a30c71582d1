//! Top-level frame driver.

use action_tree::{Action, ParallelAction, Step, StepError};
use stage_core::Stage;

/// The single active resumption state for the root action.
///
/// At most one step handle exists per root at a time; creating a fresh one
/// (via [`Sequencer::start`]) abandons the previous run wholesale. The
/// handle keeps the last step around so the host can render the most recent
/// progress notes.
#[derive(Debug, Default)]
struct StepHandle {
    resumptions: u64,
    last: Option<Step>,
}

impl StepHandle {
    fn resume(&mut self, root: &mut ParallelAction, stage: &mut Stage) -> Result<&Step, StepError> {
        let step = root.step(stage)?;
        self.resumptions += 1;
        Ok(self.last.insert(step))
    }
}

/// Drives an action tree one external tick at a time.
///
/// The sequencer owns a synthetic root [`ParallelAction`] wrapping the
/// top-level action list and the one active step handle for it. All
/// forward progress in the entire tree happens synchronously inside
/// [`tick`](Sequencer::tick), which the host calls once per frame; there is
/// no internal loop, timer, or thread.
#[derive(Default)]
pub struct Sequencer {
    root: Option<ParallelAction>,
    handle: Option<StepHandle>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new top-level action list.
    ///
    /// An empty list clears the scheduling state entirely; otherwise the
    /// actions are wrapped in a fresh root parallel node. Any previous root
    /// and step handle are discarded wholesale, with no partial-teardown
    /// hooks.
    pub fn init(&mut self, actions: Vec<Box<dyn Action>>) {
        self.handle = None;
        if actions.is_empty() {
            self.root = None;
            tracing::debug!(target: "runtime::sequencer", "init with no actions, cleared");
        } else {
            tracing::debug!(target: "runtime::sequencer", count = actions.len(), "init");
            self.root = Some(ParallelAction::new(actions));
        }
    }

    /// Begin a run: create a fresh step handle and perform the first
    /// resumption synchronously, so the initial frame already reflects
    /// first-tick effects.
    ///
    /// With no root installed this logs and returns; it is not an error to
    /// start an empty sequencer.
    pub fn start(&mut self, stage: &mut Stage) -> Result<(), StepError> {
        let Some(root) = self.root.as_mut() else {
            tracing::warn!(target: "runtime::sequencer", "no actions");
            return Ok(());
        };

        root.reset();
        let mut handle = StepHandle::default();
        let step = handle.resume(root, stage)?;
        tracing::info!(target: "runtime::sequencer", notes = ?step.notes(), "start");

        self.handle = Some(handle);
        stage.request_redraw();
        Ok(())
    }

    /// Advance the whole tree by exactly one resumption.
    ///
    /// Called once per external frame. A no-op when nothing was started or
    /// the root already finished. Resumption errors propagate to the host
    /// unchanged and are fatal for the session.
    pub fn tick(&mut self, stage: &mut Stage) -> Result<(), StepError> {
        let (Some(root), Some(handle)) = (self.root.as_mut(), self.handle.as_mut()) else {
            return Ok(());
        };
        if root.finished() {
            return Ok(());
        }

        let step = handle.resume(root, stage)?;
        if !step.notes().is_empty() {
            tracing::debug!(target: "runtime::sequencer", notes = ?step.notes(), "next");
        }

        stage.request_redraw();
        Ok(())
    }

    /// True when there is nothing (left) to run.
    pub fn finished(&self) -> bool {
        match (&self.root, &self.handle) {
            (Some(root), Some(_)) => root.finished(),
            _ => true,
        }
    }

    /// Total resumptions performed since the last `start`.
    pub fn resumptions(&self) -> u64 {
        self.handle.as_ref().map_or(0, |h| h.resumptions)
    }

    /// The most recent step, if a run is underway.
    pub fn last_step(&self) -> Option<&Step> {
        self.handle.as_ref().and_then(|h| h.last.as_ref())
    }
}
