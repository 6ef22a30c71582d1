//! Rehydration and frame driving for action trees.
//!
//! This crate turns serialized action descriptors back into live trees and
//! drives them from an external frame clock:
//!
//! - [`ActionRegistry`]: name-keyed factory map, the only dynamic-dispatch
//!   construction mechanism in the system. Scoped to an explicit value
//!   rather than a module-level singleton, so two registries never
//!   interfere.
//! - [`Script`]: a JSON stage file holding a list of top-level descriptors.
//! - [`Sequencer`]: owns the synthetic root parallel node and the single
//!   active step handle, and exposes `init` / `start` / `tick` to the host
//!   frame loop.

pub mod error;
pub mod registry;
pub mod script;
pub mod sequencer;

pub use error::BuildError;
pub use registry::{ActionRegistry, Descriptor};
pub use script::Script;
pub use sequencer::Sequencer;

// The step error propagates unchanged out of `Sequencer::tick`.
pub use action_tree::StepError;
