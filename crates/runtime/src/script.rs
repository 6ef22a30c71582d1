//! JSON stage scripts.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use action_tree::Action;
use stage_core::Stage;

use crate::{ActionRegistry, BuildError, registry::Descriptor};

/// A serialized stage script: a list of top-level action descriptors.
///
/// ```json
/// { "actions": [ { "kind": "counter", "count": 3 }, ... ] }
/// ```
///
/// Scripts only carry data; nothing is constructed until
/// [`build`](Script::build) resolves the descriptors against a registry and
/// a stage.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub actions: Vec<Descriptor>,
}

impl Script {
    /// Parse a script from JSON text.
    pub fn parse(text: &str) -> Result<Self, BuildError> {
        serde_json::from_str(text).map_err(BuildError::ScriptParse)
    }

    /// Load and parse a script file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BuildError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BuildError::ScriptIo {
            path: path.to_owned(),
            source,
        })?;
        tracing::debug!(target: "runtime::script", path = %path.display(), "loaded script");
        Self::parse(&text)
    }

    /// Construct the top-level action list, ready for
    /// [`Sequencer::init`](crate::Sequencer::init).
    pub fn build(
        &self,
        registry: &ActionRegistry,
        stage: &Stage,
    ) -> Result<Vec<Box<dyn Action>>, BuildError> {
        registry.construct_all(stage, &self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions_array() {
        let script = Script::parse(r#"{ "actions": [ { "kind": "counter", "count": 1 } ] }"#)
            .unwrap();
        assert_eq!(script.actions.len(), 1);
    }

    #[test]
    fn missing_actions_key_means_empty() {
        let script = Script::parse("{}").unwrap();
        assert!(script.actions.is_empty());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = Script::parse("{ actions: ").unwrap_err();
        assert!(matches!(err, BuildError::ScriptParse(_)));
    }
}
