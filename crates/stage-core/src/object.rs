//! Scene objects addressable by id.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Vec2;

/// Identifier for an object registered on the [`Stage`](crate::Stage).
///
/// Descriptors reference tween targets by this id rather than holding the
/// object itself, so a script can be rehydrated against whatever stage the
/// host has assembled.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An object whose position can be read and written.
///
/// This is the only capability tweens require of their target; rendering,
/// hit-testing, and layout stay with the host.
pub trait Movable: Send + Sync {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
}

/// Minimal movable scene object.
///
/// Useful as a tween target when the host has no richer widget to offer,
/// and as a stand-in in tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Prop {
    position: Vec2,
}

impl Prop {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }
}

impl Movable for Prop {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}
