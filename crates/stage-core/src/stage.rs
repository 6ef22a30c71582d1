//! The stage: explicit context threaded through every resumption.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::{
    Clock, ExerciseHost, Movable, NoExercises, NullRedraw, NullSpeech, ObjectId, RedrawRequester,
    SpeechDriver, SystemClock,
};

/// Everything the scheduler shares with the outside world.
///
/// A stage owns the scene objects tweens mutate, the clock, and the
/// speech/exercise/redraw collaborators. It is passed by mutable reference
/// into each resumption; because only one resumption is ever in flight,
/// every collaborator is effectively single-writer.
pub struct Stage {
    objects: HashMap<ObjectId, Box<dyn Movable>>,
    clock: Arc<dyn Clock>,
    speech: Box<dyn SpeechDriver>,
    exercises: Box<dyn ExerciseHost>,
    redraw: Box<dyn RedrawRequester>,
}

impl Stage {
    pub fn builder() -> StageBuilder {
        StageBuilder::new()
    }

    /// Put an object on the stage.
    ///
    /// A duplicate id replaces the previous object; that is almost always a
    /// script bug, so it is logged.
    pub fn add_object(&mut self, id: impl Into<ObjectId>, object: impl Movable + 'static) {
        let id = id.into();
        if self.objects.contains_key(&id) {
            tracing::warn!(target: "stage", %id, "duplicate object id, replacing");
        }
        self.objects.insert(id, Box::new(object));
    }

    pub fn contains_object(&self, id: &ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    pub fn object(&self, id: &ObjectId) -> Option<&dyn Movable> {
        self.objects.get(id).map(|o| o.as_ref() as &dyn Movable)
    }

    pub fn object_mut(&mut self, id: &ObjectId) -> Option<&mut dyn Movable> {
        self.objects.get_mut(id).map(|o| o.as_mut() as &mut dyn Movable)
    }

    /// Current wall time as seen by this stage's clock.
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Shared handle to the stage clock, for collaborators that pace
    /// themselves (e.g. emulated speech).
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    pub fn speech(&mut self) -> &mut dyn SpeechDriver {
        self.speech.as_mut()
    }

    pub fn exercises(&mut self) -> &mut dyn ExerciseHost {
        self.exercises.as_mut()
    }

    pub fn request_redraw(&mut self) {
        self.redraw.request_update();
    }
}

/// Builder assembling a [`Stage`] from collaborators.
///
/// Every collaborator has a no-op default, so a headless stage for tests is
/// just `Stage::builder().build()`.
pub struct StageBuilder {
    objects: HashMap<ObjectId, Box<dyn Movable>>,
    clock: Arc<dyn Clock>,
    speech: Box<dyn SpeechDriver>,
    exercises: Box<dyn ExerciseHost>,
    redraw: Box<dyn RedrawRequester>,
}

impl StageBuilder {
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            clock: Arc::new(SystemClock),
            speech: Box::new(NullSpeech),
            exercises: Box::new(NoExercises),
            redraw: Box::new(NullRedraw),
        }
    }

    pub fn object(mut self, id: impl Into<ObjectId>, object: impl Movable + 'static) -> Self {
        self.objects.insert(id.into(), Box::new(object));
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn speech(mut self, speech: impl SpeechDriver + 'static) -> Self {
        self.speech = Box::new(speech);
        self
    }

    pub fn exercises(mut self, exercises: impl ExerciseHost + 'static) -> Self {
        self.exercises = Box::new(exercises);
        self
    }

    pub fn redraw(mut self, redraw: impl RedrawRequester + 'static) -> Self {
        self.redraw = Box::new(redraw);
        self
    }

    pub fn build(self) -> Stage {
        Stage {
            objects: self.objects,
            clock: self.clock,
            speech: self.speech,
            exercises: self.exercises,
            redraw: self.redraw,
        }
    }
}

impl Default for StageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
