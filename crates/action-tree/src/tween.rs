//! Time-based position tween.

use std::time::{Duration, Instant};

use stage_core::{ObjectId, Stage, Vec2};

use crate::{Action, Step, StepError};

/// Minimum wall time between two textual progress notes.
///
/// Decouples the reporting rate from the resumption rate: the driver ticks
/// once per frame, but nobody wants a log line per frame.
pub const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Linearly interpolates a target's position towards a destination over a
/// fixed wall-clock duration.
///
/// The first resumption records the start time and start position; every
/// later resumption reads the stage clock, writes the interpolated position,
/// and yields. Once `elapsed >= duration` the target is pinned exactly to
/// the destination and the tween completes, with no overshoot and no
/// residual ratio above 1.
#[derive(Debug, Clone)]
pub struct TweenAction {
    target: ObjectId,
    destination: Vec2,
    duration: Duration,
    run: Option<TweenRun>,
    finished: bool,
}

/// Resumption state of a running tween.
#[derive(Debug, Clone, Copy)]
struct TweenRun {
    started_at: Instant,
    start_position: Vec2,
    last_report: Instant,
}

impl TweenAction {
    pub const KIND: &'static str = "tween";

    pub fn new(target: impl Into<ObjectId>, destination: Vec2, duration: Duration) -> Self {
        Self {
            target: target.into(),
            destination,
            duration,
            run: None,
            finished: false,
        }
    }

    fn position_of(&self, stage: &Stage) -> Result<Vec2, StepError> {
        stage
            .object(&self.target)
            .map(|o| o.position())
            .ok_or_else(|| StepError::TargetVanished(self.target.clone()))
    }
}

impl Action for TweenAction {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn finished(&self) -> bool {
        self.finished
    }

    fn reset(&mut self) {
        self.run = None;
        self.finished = false;
    }

    fn step(&mut self, stage: &mut Stage) -> Result<Step, StepError> {
        assert!(!self.finished, "tween resumed after completion");

        let now = stage.now();
        let mut run = match self.run {
            Some(run) => run,
            None => TweenRun {
                started_at: now,
                start_position: self.position_of(stage)?,
                last_report: now,
            },
        };

        let elapsed = now - run.started_at;
        if elapsed >= self.duration {
            self.finished = true;
            let destination = self.destination;
            let target = stage
                .object_mut(&self.target)
                .ok_or_else(|| StepError::TargetVanished(self.target.clone()))?;
            target.set_position(destination);
            return Ok(Step::Done(None));
        }

        let ratio = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let next = run.start_position.lerp(self.destination, ratio);
        let report = now - run.last_report >= REPORT_INTERVAL;
        if report {
            run.last_report = now;
        }

        let target = stage
            .object_mut(&self.target)
            .ok_or_else(|| StepError::TargetVanished(self.target.clone()))?;
        target.set_position(next);
        self.run = Some(run);

        if report {
            Ok(Step::note(format!(
                "move {} to {} ({:.2}/{:.2}s)",
                self.target,
                next,
                elapsed.as_secs_f64(),
                self.duration.as_secs_f64(),
            )))
        } else {
            Ok(Step::quiet())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use stage_core::{ManualClock, Prop};

    use super::*;

    fn stage_with_clock() -> (Stage, ManualClock) {
        let clock = ManualClock::new();
        let stage = Stage::builder()
            .clock(Arc::new(clock.clone()))
            .object("hero", Prop::new(Vec2::ZERO))
            .build();
        (stage, clock)
    }

    fn hero_position(stage: &Stage) -> Vec2 {
        stage.object(&ObjectId::from("hero")).unwrap().position()
    }

    #[test]
    fn interpolates_towards_destination() {
        let (mut stage, clock) = stage_with_clock();
        let mut tween = TweenAction::new("hero", Vec2::new(100.0, 0.0), Duration::from_secs(2));

        tween.step(&mut stage).unwrap();
        assert_eq!(hero_position(&stage), Vec2::ZERO);

        clock.advance(Duration::from_millis(500));
        tween.step(&mut stage).unwrap();
        assert_eq!(hero_position(&stage), Vec2::new(25.0, 0.0));

        clock.advance(Duration::from_millis(500));
        tween.step(&mut stage).unwrap();
        assert_eq!(hero_position(&stage), Vec2::new(50.0, 0.0));
    }

    #[test]
    fn lands_exactly_on_destination() {
        let (mut stage, clock) = stage_with_clock();
        let destination = Vec2::new(33.0, -7.0);
        let mut tween = TweenAction::new("hero", destination, Duration::from_secs(1));

        tween.step(&mut stage).unwrap();
        clock.advance(Duration::from_millis(1700)); // well past the duration
        let step = tween.step(&mut stage).unwrap();

        assert!(step.is_done());
        assert!(tween.finished());
        assert_eq!(hero_position(&stage), destination);
    }

    #[test]
    fn ratio_is_monotonic() {
        let (mut stage, clock) = stage_with_clock();
        let mut tween = TweenAction::new("hero", Vec2::new(100.0, 0.0), Duration::from_secs(10));

        let mut last_x = -1.0;
        for _ in 0..20 {
            tween.step(&mut stage).unwrap();
            let x = hero_position(&stage).x;
            assert!(x >= last_x, "position regressed: {x} < {last_x}");
            last_x = x;
            clock.advance(Duration::from_millis(100));
        }
    }

    #[test]
    fn notes_are_rate_limited() {
        let (mut stage, clock) = stage_with_clock();
        let mut tween = TweenAction::new("hero", Vec2::new(100.0, 0.0), Duration::from_secs(60));

        // 16ms frames: one textual note per 500ms window, quiet ticks between.
        let mut notes = 0;
        for _ in 0..125 {
            let step = tween.step(&mut stage).unwrap();
            notes += step.notes().len();
            clock.advance(Duration::from_millis(16));
        }

        // Reports land at 512ms, 1024ms, and 1536ms of the 1984ms driven.
        assert_eq!(notes, 3);
    }

    #[test]
    fn vanished_target_is_an_error() {
        let (mut stage, _clock) = stage_with_clock();
        let mut tween = TweenAction::new("ghost", Vec2::ZERO, Duration::from_secs(1));

        let err = tween.step(&mut stage).unwrap_err();
        assert!(matches!(err, StepError::TargetVanished(id) if id.as_str() == "ghost"));
    }
}
