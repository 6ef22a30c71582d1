//! Stage context and collaborator interfaces for the action scheduler.
//!
//! This crate defines everything an action needs from the outside world:
//!
//! - [`Vec2`]: continuous 2D position used by tweens
//! - [`Movable`]: scene objects whose position can be read and written
//! - [`Clock`]: wall-time source, swappable for tests ([`ManualClock`])
//! - [`SpeechDriver`]: text-to-speech collaborator polled for completion
//! - [`ExerciseHost`]: question/answer interaction collaborator
//! - [`RedrawRequester`]: coalescing repaint hook
//!
//! All of these hang off a single [`Stage`] value that is threaded explicitly
//! through every resumption. There is no global state; two schedulers with
//! two stages never observe each other.

pub mod clock;
pub mod exercise;
pub mod object;
pub mod redraw;
pub mod speech;
pub mod stage;
pub mod vec2;

// Re-export core types for ergonomic API
pub use clock::{Clock, ManualClock, SystemClock};
pub use exercise::{ExerciseHost, NoExercises, Question};
pub use object::{Movable, ObjectId, Prop};
pub use redraw::{NullRedraw, RedrawCounter, RedrawRequester};
pub use speech::{EmulatedSpeech, NullSpeech, SpeechDriver};
pub use stage::{Stage, StageBuilder};
pub use vec2::Vec2;
