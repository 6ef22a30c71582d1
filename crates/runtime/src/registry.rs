//! Name-keyed action factory registry.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use action_tree::{
    Action, CounterAction, ExerciseAction, ParallelAction, SequentialAction, SpeechAction,
    TweenAction,
};
use stage_core::{ObjectId, Stage, Vec2};

use crate::BuildError;

/// A serialized action descriptor: `{ "kind": tag, ...fields }`.
///
/// Composite descriptors nest children under an `"actions"` array.
pub type Descriptor = Value;

/// Factory producing an action from its descriptor.
///
/// Factories receive the registry to recursively construct child
/// descriptors, and the stage so references (tween targets) can be
/// validated before scheduling begins.
pub type ActionFactory =
    Box<dyn Fn(&ActionRegistry, &Stage, &Descriptor) -> Result<Box<dyn Action>, BuildError> + Send + Sync>;

/// Mapping from kind tag to constructor.
///
/// Append-only at startup and read-only during scheduling. Registering the
/// same tag twice overwrites the earlier factory (last wins) and logs a
/// warning, since a silent overwrite hides real registration bugs.
pub struct ActionRegistry {
    factories: HashMap<String, ActionFactory>,
}

impl ActionRegistry {
    /// Empty registry with no kinds at all.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registry pre-populated with every built-in action kind.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register(CounterAction::KIND, |_, _, value| {
            let params: CounterParams = decode(CounterAction::KIND, value)?;
            Ok(Box::new(CounterAction::new(params.count)) as Box<dyn Action>)
        });

        registry.register(TweenAction::KIND, |_, stage, value| {
            let params: TweenParams = decode(TweenAction::KIND, value)?;
            if !params.duration.is_finite() || params.duration <= 0.0 {
                return Err(BuildError::InvalidDuration(params.duration));
            }
            if !stage.contains_object(&params.target_id) {
                return Err(BuildError::UnknownTarget(params.target_id));
            }
            Ok(Box::new(TweenAction::new(
                params.target_id,
                params.destination,
                Duration::from_secs_f64(params.duration),
            )) as Box<dyn Action>)
        });

        registry.register(SpeechAction::KIND, |_, _, value| {
            let params: SpeechParams = decode(SpeechAction::KIND, value)?;
            Ok(Box::new(SpeechAction::new(params.text)) as Box<dyn Action>)
        });

        registry.register(ExerciseAction::KIND, |_, _, value| {
            let params: ExerciseParams = decode(ExerciseAction::KIND, value)?;
            Ok(Box::new(ExerciseAction::new(params.trials)) as Box<dyn Action>)
        });

        registry.register(SequentialAction::KIND, |registry, stage, value| {
            let children = child_actions(SequentialAction::KIND, registry, stage, value)?;
            Ok(Box::new(SequentialAction::new(children)) as Box<dyn Action>)
        });

        registry.register(ParallelAction::KIND, |registry, stage, value| {
            let children = child_actions(ParallelAction::KIND, registry, stage, value)?;
            Ok(Box::new(ParallelAction::new(children)) as Box<dyn Action>)
        });

        registry
    }

    /// Register a factory for `kind`.
    pub fn register<F>(&mut self, kind: impl Into<String>, factory: F)
    where
        F: Fn(&ActionRegistry, &Stage, &Descriptor) -> Result<Box<dyn Action>, BuildError>
            + Send
            + Sync
            + 'static,
    {
        let kind = kind.into();
        if self.factories.contains_key(&kind) {
            tracing::warn!(target: "runtime::registry", %kind, "duplicate registration, overwriting");
        }
        self.factories.insert(kind, Box::new(factory));
    }

    /// Reconstruct one action (and, recursively, its children) from a
    /// descriptor.
    pub fn construct(
        &self,
        stage: &Stage,
        descriptor: &Descriptor,
    ) -> Result<Box<dyn Action>, BuildError> {
        let kind = descriptor
            .get("kind")
            .and_then(Value::as_str)
            .ok_or(BuildError::MissingKind)?;

        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| BuildError::UnknownKind(kind.to_owned()))?;

        factory(self, stage, descriptor)
    }

    /// Reconstruct a list of descriptors, failing on the first bad one.
    pub fn construct_all(
        &self,
        stage: &Stage,
        descriptors: &[Descriptor],
    ) -> Result<Vec<Box<dyn Action>>, BuildError> {
        descriptors
            .iter()
            .map(|descriptor| self.construct(stage, descriptor))
            .collect()
    }

    /// Returns an iterator over registered kind tags (for debugging).
    pub fn kinds(&self) -> impl Iterator<Item = &str> + '_ {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Deserialize a typed parameter struct out of a descriptor, tagging
/// failures with the action kind.
fn decode<T: DeserializeOwned>(kind: &str, value: &Descriptor) -> Result<T, BuildError> {
    serde_json::from_value(value.clone()).map_err(|source| BuildError::Descriptor {
        kind: kind.to_owned(),
        source,
    })
}

/// Recursively construct a composite's `actions` array.
fn child_actions(
    kind: &str,
    registry: &ActionRegistry,
    stage: &Stage,
    value: &Descriptor,
) -> Result<Vec<Box<dyn Action>>, BuildError> {
    let params: CompositeParams = decode(kind, value)?;
    registry.construct_all(stage, &params.actions)
}

#[derive(Deserialize)]
struct CounterParams {
    count: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TweenParams {
    target_id: ObjectId,
    destination: Vec2,
    duration: f64,
}

#[derive(Deserialize)]
struct SpeechParams {
    text: String,
}

#[derive(Deserialize)]
struct ExerciseParams {
    trials: u64,
}

#[derive(Deserialize)]
struct CompositeParams {
    actions: Vec<Descriptor>,
}
