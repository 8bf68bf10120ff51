use std::io;
use std::path::PathBuf;

use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ArtifactKind {
    Model,
    DefaultValues,
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read {kind} artifact at {}", path.display())]
    Io {
        kind: ArtifactKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {kind} artifact at {}", path.display())]
    Parse {
        kind: ArtifactKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported model schema version {found} (expected {expected})")]
    UnsupportedSchemaVersion { found: u32, expected: u32 },

    #[error("invalid feature schema: {0}")]
    InvalidSchema(String),

    #[error("invalid model: {0}")]
    InvalidModel(String),

    #[error("default value for '{feature}' is not a finite number")]
    InvalidDefault { feature: String },

    #[error(
        "default value table is missing {} feature(s) required by the model: {}",
        missing.len(),
        missing.join(", ")
    )]
    DefaultsMismatch { missing: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("feature '{feature}' is required by the model but has neither a user value nor a default")]
    MissingFeature { feature: String },

    #[error("record has {found} features, the model expects {expected}")]
    FeatureCount { expected: usize, found: usize },

    #[error(
        "record feature order does not match the model at position {position}: expected '{expected}', found '{found}'"
    )]
    SchemaOrder {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("classifier was called with an empty batch")]
    EmptyBatch,

    #[error("classifier returned an invalid probability ({0})")]
    InvalidProbability(f64),

    #[error("classifier returned label {0}, expected 0 or 1")]
    InvalidLabel(u8),
}
