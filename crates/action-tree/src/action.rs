//! Core action contract.
//!
//! This module defines the [`Action`] trait and the [`Step`] result that a
//! resumption produces. A step either leaves the action suspended with a
//! batch of progress notes, or completes it with an optional terminal note.

use stage_core::Stage;

use crate::StepError;

/// Outcome of resuming an action by exactly one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The action advanced and remains suspended.
    ///
    /// Carries the progress notes surfaced during this resumption. Leaf
    /// actions contribute at most one note; a parallel pass concatenates
    /// the notes of every live child, so one resumption can carry `0..N`.
    /// An empty list is still a tick; tweens use it between rate-limited
    /// reports.
    Yielded(Vec<String>),

    /// The action completed during this resumption.
    ///
    /// After `Done` the action's `finished` flag is set and it must not be
    /// resumed again.
    Done(Option<String>),
}

impl Step {
    /// A tick that surfaces no note.
    pub fn quiet() -> Self {
        Step::Yielded(Vec::new())
    }

    /// A tick carrying a single progress note.
    pub fn note(text: impl Into<String>) -> Self {
        Step::Yielded(vec![text.into()])
    }

    /// Returns `true` if this step completed the action.
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }

    /// Progress notes surfaced by this step (empty for `Done`).
    pub fn notes(&self) -> &[String] {
        match self {
            Step::Yielded(notes) => notes,
            Step::Done(_) => &[],
        }
    }
}

/// A resumable unit of scheduled work.
///
/// # Contract
///
/// - [`step`](Action::step) is called once per external tick and must
///   advance the action by exactly one suspension interval.
/// - `finished` starts false and becomes true exactly once, on the
///   resumption that returns [`Step::Done`].
/// - Resuming a finished action is a programming error and panics; a broken
///   driver integration is not recoverable.
/// - Run state is single-pass. [`reset`](Action::reset) rewinds the action
///   (and, for composites, every child) so a fresh run can begin.
pub trait Action: Send + Sync + std::fmt::Debug {
    /// Tag identifying this action kind, used for serialization only.
    fn kind(&self) -> &'static str;

    /// True once the action has naturally completed.
    fn finished(&self) -> bool;

    /// Rewind all resumption state for a fresh run.
    fn reset(&mut self);

    /// Resume by one step against the given stage.
    fn step(&mut self, stage: &mut Stage) -> Result<Step, StepError>;
}

/// Blanket implementation for boxed actions.
///
/// This allows `Box<dyn Action>` to also implement `Action`, so composites
/// and drivers work with heterogeneous child lists.
impl Action for Box<dyn Action> {
    #[inline]
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    #[inline]
    fn finished(&self) -> bool {
        (**self).finished()
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    #[inline]
    fn step(&mut self, stage: &mut Stage) -> Result<Step, StepError> {
        (**self).step(stage)
    }
}
