//! Cooperative, tree-structured action scheduling core.
//!
//! An [`Action`] is a resumable unit of deferred work. Nothing here runs on
//! its own: all forward progress happens when an external driver resumes the
//! tree by one [`step`](Action::step), once per frame. Resumption state is
//! held in plain fields (a cursor for sequential composition, a live-index
//! list for parallel composition, start time/position for tweens), which
//! keeps the state machines inspectable instead of hiding them inside
//! language-level coroutines.
//!
//! - **No threads, no timers**: one resumption is in flight at a time
//! - **Finite leaves**: every provided leaf action completes in finitely
//!   many resumptions, except where a collaborator stalls on purpose
//! - **Strict ordering**: sequential children never overlap; parallel
//!   children are resumed round-robin in list order, once per pass
//!
//! # Architecture
//!
//! - [`Action`]: step contract with a `finished` flag
//! - [`Step`]: outcome of one resumption, `Yielded` or `Done`
//! - Leaf actions: [`CounterAction`], [`TweenAction`], [`SpeechAction`],
//!   [`ExerciseAction`]
//! - Composite actions: [`SequentialAction`], [`ParallelAction`]

pub mod action;
pub mod composite;
pub mod counter;
pub mod error;
pub mod exercise;
pub mod speech;
pub mod tween;

// Re-export core types for ergonomic API
pub use action::{Action, Step};
pub use composite::{ParallelAction, SequentialAction};
pub use counter::CounterAction;
pub use error::StepError;
pub use exercise::ExerciseAction;
pub use speech::SpeechAction;
pub use tween::TweenAction;
