//! Speech leaf action.

use stage_core::Stage;

use crate::{Action, Step, StepError};

/// Speaks a line through the stage's speech driver and waits for it to end.
///
/// The first resumption hands the text to the driver and yields; every
/// later resumption polls the driver's `speaking` flag, yielding quietly
/// while playback runs and completing once it stops. The scheduler puts no
/// upper bound on this: a driver that never reports completion keeps the
/// whole tree alive, which is the driver's problem to validate.
#[derive(Debug, Clone)]
pub struct SpeechAction {
    text: String,
    started: bool,
    finished: bool,
}

impl SpeechAction {
    pub const KIND: &'static str = "speech";

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            started: false,
            finished: false,
        }
    }
}

impl Action for SpeechAction {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn finished(&self) -> bool {
        self.finished
    }

    fn reset(&mut self) {
        self.started = false;
        self.finished = false;
    }

    fn step(&mut self, stage: &mut Stage) -> Result<Step, StepError> {
        assert!(!self.finished, "speech resumed after completion");

        if !self.started {
            self.started = true;
            stage.speech().speak(&self.text);
            return Ok(Step::note(format!("speak [{}]", self.text)));
        }

        if stage.speech().speaking() {
            Ok(Step::quiet())
        } else {
            self.finished = true;
            Ok(Step::Done(None))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use stage_core::SpeechDriver;

    use super::*;

    /// Driver that counts `speak` calls and finishes instantly.
    struct CountingSpeech {
        spoken: Arc<AtomicUsize>,
    }

    impl SpeechDriver for CountingSpeech {
        fn speak(&mut self, _text: &str) {
            self.spoken.fetch_add(1, Ordering::Relaxed);
        }

        fn speaking(&self) -> bool {
            false
        }
    }

    #[test]
    fn speaks_once_then_polls_to_completion() {
        let spoken = Arc::new(AtomicUsize::new(0));
        let mut stage = Stage::builder()
            .speech(CountingSpeech {
                spoken: Arc::clone(&spoken),
            })
            .build();

        let mut action = SpeechAction::new("hello");

        let step = action.step(&mut stage).unwrap();
        assert_eq!(step.notes(), ["speak [hello]".to_owned()]);
        assert_eq!(spoken.load(Ordering::Relaxed), 1);
        assert!(!action.finished());

        let step = action.step(&mut stage).unwrap();
        assert!(step.is_done());
        assert!(action.finished());
        assert_eq!(spoken.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn yields_quietly_while_driver_is_speaking() {
        use stage_core::{EmulatedSpeech, ManualClock};
        use std::time::Duration;

        let clock = ManualClock::new();
        let mut stage = Stage::builder()
            .clock(Arc::new(clock.clone()))
            .speech(EmulatedSpeech::with_pace(
                Arc::new(clock.clone()),
                Duration::from_millis(100),
            ))
            .build();

        let mut action = SpeechAction::new("abc"); // 300ms of emulated playback

        action.step(&mut stage).unwrap();

        clock.advance(Duration::from_millis(150));
        assert_eq!(action.step(&mut stage).unwrap(), Step::quiet());

        clock.advance(Duration::from_millis(150));
        assert!(action.step(&mut stage).unwrap().is_done());
    }
}
