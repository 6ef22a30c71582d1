//! Text-to-speech collaborator interface.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::Clock;

/// External speech playback, polled for completion.
///
/// The scheduler never waits on a callback: a speech action calls
/// [`speak`](SpeechDriver::speak) once and then polls
/// [`speaking`](SpeechDriver::speaking) on every resumption until it reports
/// false. A driver that never clears the flag keeps the whole action tree
/// alive; validating that is the driver's job, not the scheduler's.
pub trait SpeechDriver: Send + Sync {
    fn speak(&mut self, text: &str);
    fn speaking(&self) -> bool;
}

/// Driver that only logs. Reports completion immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSpeech;

impl SpeechDriver for NullSpeech {
    fn speak(&mut self, text: &str) {
        tracing::info!(target: "stage::speech", text, "speak (no audio)");
    }

    fn speaking(&self) -> bool {
        false
    }
}

/// Driver that emulates playback duration against the stage clock.
///
/// No audio is produced; `speaking` stays true for a per-character budget,
/// which is enough to exercise the pacing of speech-driven scripts on
/// machines with no voice installed.
pub struct EmulatedSpeech {
    clock: Arc<dyn Clock>,
    per_char: Duration,
    until: Option<Instant>,
}

impl EmulatedSpeech {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_pace(clock, Duration::from_millis(60))
    }

    pub fn with_pace(clock: Arc<dyn Clock>, per_char: Duration) -> Self {
        Self {
            clock,
            per_char,
            until: None,
        }
    }
}

impl SpeechDriver for EmulatedSpeech {
    fn speak(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            self.until = None;
            return;
        }

        let budget = self.per_char * text.chars().count() as u32;
        self.until = Some(self.clock.now() + budget);
        tracing::info!(target: "stage::speech", text, ?budget, "speak (emulated)");
    }

    fn speaking(&self) -> bool {
        match self.until {
            Some(until) => self.clock.now() < until,
            None => false,
        }
    }
}
