use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::artifacts::defaults::DefaultValueTable;
use crate::artifacts::model::{ModelArtifact, ModelInfo};
use crate::classifiers::{Classifier, ClassifierRef};
use crate::core::FeatureSchema;
use crate::error::ArtifactError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub defaults: PathBuf,
}

/// Every schema feature is guaranteed a default once construction succeeds.
pub struct ArtifactStore {
    classifier: ClassifierRef,
    defaults: DefaultValueTable,
    info: ModelInfo,
}

impl ArtifactStore {
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        debug!(model = %paths.model.display(), defaults = %paths.defaults.display(), "loading artifacts");

        let (classifier, info) = ModelArtifact::from_path(&paths.model)?.into_classifier()?;
        let defaults = DefaultValueTable::from_path(&paths.defaults)?;
        let store = Self::from_parts(classifier, defaults, info)?;

        info!(
            kind = %store.info.kind,
            summary = %store.info.summary,
            features = store.schema().len(),
            "model artifacts loaded"
        );
        Ok(store)
    }

    pub fn from_parts(
        classifier: ClassifierRef,
        defaults: DefaultValueTable,
        info: ModelInfo,
    ) -> Result<Self, ArtifactError> {
        let missing = defaults.missing_from(classifier.schema());
        if !missing.is_empty() {
            return Err(ArtifactError::DefaultsMismatch { missing });
        }

        let unused = defaults.unused_by(classifier.schema());
        if !unused.is_empty() {
            warn!(features = ?unused, "default values present for features the model does not use");
        }

        Ok(ArtifactStore {
            classifier,
            defaults,
            info,
        })
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn schema(&self) -> &FeatureSchema {
        self.classifier.schema()
    }

    pub fn defaults(&self) -> &DefaultValueTable {
        &self.defaults
    }

    pub fn info(&self) -> &ModelInfo {
        &self.info
    }
}

impl fmt::Debug for ArtifactStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactStore")
            .field("kind", &self.info.kind)
            .field("n_features", &self.schema().len())
            .finish()
    }
}

impl ArtifactPaths {
    pub fn new(model: impl AsRef<Path>, defaults: impl AsRef<Path>) -> Self {
        ArtifactPaths {
            model: model.as_ref().to_path_buf(),
            defaults: defaults.as_ref().to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::ModelKind;
    use crate::error::ArtifactKind;
    use crate::testing::fixtures;
    use std::fs;
    use tempfile::tempdir;

    const MODEL: &str = r#"{
        "schema_version": 1,
        "feature_names": ["age", "hemo", "sc"],
        "model": { "type": "logistic", "params": { "intercept": -2.0, "coefficients": [0.0, -0.1, 2.0] } }
    }"#;

    fn write_pair(model: &str, defaults: &str) -> (tempfile::TempDir, ArtifactPaths) {
        let dir = tempdir().unwrap();
        let paths = ArtifactPaths::new(dir.path().join("model.json"), dir.path().join("medians.json"));
        fs::write(&paths.model, model).unwrap();
        fs::write(&paths.defaults, defaults).unwrap();
        (dir, paths)
    }

    #[test]
    fn loads_matching_model_and_defaults() {
        let (_dir, paths) = write_pair(MODEL, r#"{ "age": 40, "hemo": 12.0, "sc": 1.1 }"#);
        let store = ArtifactStore::load(&paths).unwrap();
        assert_eq!(store.schema().len(), 3);
        assert_eq!(store.defaults().get("sc"), Some(1.1));
        assert_eq!(store.info().kind, ModelKind::Logistic);
    }

    #[test]
    fn defaults_missing_a_schema_feature_fail_at_load() {
        let (_dir, paths) = write_pair(MODEL, r#"{ "age": 40, "hemo": 12.0 }"#);
        let err = ArtifactStore::load(&paths).unwrap_err();
        match err {
            ArtifactError::DefaultsMismatch { missing } => assert_eq!(missing, vec!["sc".to_string()]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extra_defaults_are_tolerated() {
        let (_dir, paths) =
            write_pair(MODEL, r#"{ "age": 40, "hemo": 12.0, "sc": 1.1, "pcv": 40 }"#);
        assert!(ArtifactStore::load(&paths).is_ok());
    }

    #[test]
    fn absent_model_file_is_reported_with_its_path() {
        let dir = tempdir().unwrap();
        let paths = ArtifactPaths::new(dir.path().join("nope.json"), dir.path().join("medians.json"));
        let err = ArtifactStore::load(&paths).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::Io {
                kind: ArtifactKind::Model,
                ..
            }
        ));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn corrupt_model_file_is_a_parse_error() {
        let (_dir, paths) = write_pair("{ not json", r#"{}"#);
        assert!(matches!(
            ArtifactStore::load(&paths),
            Err(ArtifactError::Parse {
                kind: ArtifactKind::Model,
                ..
            })
        ));
    }

    #[test]
    fn bundled_artifacts_load_and_agree() {
        let store = ArtifactStore::load(&fixtures::bundled_paths()).unwrap();

        assert_eq!(store.info().kind, ModelKind::TreeEnsemble);
        assert_eq!(store.schema().len(), 24);
        for feature in crate::catalog::TOP_FEATURES {
            assert!(store.schema().contains(feature), "bundled model lacks {feature}");
        }
    }
}
