//! Resumption-time errors.

use stage_core::ObjectId;

/// Errors surfaced while resuming an action.
///
/// These are fatal for the running tree: the driver propagates them out of
/// its tick unchanged, with no retry or partial recovery.
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    /// A tween's target was removed from the stage mid-run.
    #[error("tween target `{0}` is no longer on the stage")]
    TargetVanished(ObjectId),

    /// The exercise host ran out of questions before the trial count.
    #[error("exercise host ran dry after {asked} of {wanted} questions")]
    QuestionsExhausted { asked: u64, wanted: u64 },
}
