//! Construction-time errors.

use std::path::PathBuf;

use stage_core::ObjectId;

/// Errors raised while turning descriptors into an action tree.
///
/// All of these abort the build before any scheduling begins; a partially
/// constructed tree is never handed out.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Descriptor carries a tag no factory was registered for.
    #[error("unknown action kind `{0}`")]
    UnknownKind(String),

    /// Descriptor has no `kind` tag at all.
    #[error("descriptor has no `kind` tag")]
    MissingKind,

    /// Descriptor fields failed to deserialize for the given kind.
    #[error("malformed `{kind}` descriptor: {source}")]
    Descriptor {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    /// A tween references an object the stage does not have.
    #[error("tween target `{0}` is not on the stage")]
    UnknownTarget(ObjectId),

    /// Durations must be positive, finite seconds.
    #[error("duration must be a positive number of seconds, got {0}")]
    InvalidDuration(f64),

    /// Script file could not be read.
    #[error("failed to read script `{path}`")]
    ScriptIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Script text is not valid JSON of the expected shape.
    #[error("script is not valid JSON")]
    ScriptParse(#[source] serde_json::Error),
}
