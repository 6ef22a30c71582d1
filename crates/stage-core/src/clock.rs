//! Wall-time source used by time-parameterized actions.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Source of the current time.
///
/// Tweens make no timing assumption beyond what they read from this clock,
/// so swapping in a [`ManualClock`] makes time-dependent behavior fully
/// deterministic in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Real wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-advanced clock.
///
/// Cloning yields a handle to the same underlying time, so a test can keep
/// one handle while the stage owns another.
#[derive(Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Move time forward by `delta`. Never goes backwards.
    pub fn advance(&self, delta: Duration) {
        let mut offset = self.offset.lock().unwrap();
        *offset += delta;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock().unwrap()
    }
}
