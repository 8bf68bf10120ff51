mod defaults;
mod model;
mod store;

pub use defaults::DefaultValueTable;
pub use model::{
    ModelArtifact, ModelInfo, ModelKind, ModelMetadata, ModelSpec, SUPPORTED_SCHEMA_VERSION,
};
pub use store::{ArtifactPaths, ArtifactStore};

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ArtifactError, ArtifactKind};

fn read_json<T: DeserializeOwned>(kind: ArtifactKind, path: &Path) -> Result<T, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        kind,
        path: path.to_path_buf(),
        source,
    })
}
