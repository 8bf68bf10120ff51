use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde::Deserialize;
use tracing::debug;

use crate::artifacts::ArtifactPaths;
use crate::prediction::ConfidenceMode;

pub const DEFAULT_MODEL_PATH: &str = "artifacts/ckd_model.json";
pub const DEFAULT_DEFAULTS_PATH: &str = "artifacts/median_values.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub model: PathBuf,
    pub defaults: PathBuf,
    pub confidence: ConfidenceMode,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            model: PathBuf::from(DEFAULT_MODEL_PATH),
            defaults: PathBuf::from(DEFAULT_DEFAULTS_PATH),
            confidence: ConfidenceMode::default(),
        }
    }
}

// Keys left out of the file keep their built-in value.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
#[schemars(title = "renalrisk settings")]
struct SettingsFile {
    #[schemars(
        title = "Model artifact",
        description = "JSON model document holding the feature schema and the classifier",
        extend("format" = "path", "default" = DEFAULT_MODEL_PATH)
    )]
    model: Option<PathBuf>,

    #[schemars(
        title = "Default values",
        description = "JSON object mapping every model feature to its training-set median",
        extend("format" = "path", "default" = DEFAULT_DEFAULTS_PATH)
    )]
    defaults: Option<PathBuf>,

    #[schemars(
        title = "Confidence",
        description = "positive-class shows P(CKD) for every verdict; predicted-class shows the probability of the predicted class"
    )]
    confidence: Option<ConfidenceMode>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub model: Option<PathBuf>,
    pub defaults: Option<PathBuf>,
    pub confidence: Option<ConfidenceMode>,
}

impl Settings {
    pub fn resolve(config: Option<&Path>, overrides: SettingsOverrides) -> Result<Settings> {
        let base = match config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };
        let settings = base.with_overrides(overrides);
        debug!(?settings, "settings resolved");
        Ok(settings)
    }

    /// Relative artifact paths in the file are taken relative to the file itself.
    pub fn from_file(path: &Path) -> Result<Settings> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let file: SettingsFile = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;

        let dir = path.parent().unwrap_or(Path::new(""));
        Ok(Settings::default().with_overrides(SettingsOverrides {
            model: file.model.map(|p| rebase(dir, &p)),
            defaults: file.defaults.map(|p| rebase(dir, &p)),
            confidence: file.confidence,
        }))
    }

    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Settings {
        if let Some(model) = overrides.model {
            self.model = model;
        }
        if let Some(defaults) = overrides.defaults {
            self.defaults = defaults;
        }
        if let Some(confidence) = overrides.confidence {
            self.confidence = confidence;
        }
        self
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::new(&self.model, &self.defaults)
    }

    pub fn json_schema() -> Schema {
        schema_for!(SettingsFile)
    }
}

fn rebase(dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || dir.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn defaults_point_at_bundled_artifacts() {
        let s = Settings::resolve(None, SettingsOverrides::default()).unwrap();
        assert_eq!(s.model, PathBuf::from(DEFAULT_MODEL_PATH));
        assert_eq!(s.defaults, PathBuf::from(DEFAULT_DEFAULTS_PATH));
        assert_eq!(s.confidence, ConfidenceMode::PositiveClass);
    }

    #[test]
    fn file_values_are_rebased_and_partial_files_keep_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("renalrisk.json");
        fs::write(&path, r#"{ "model": "models/xgb.json", "confidence": "predicted-class" }"#).unwrap();

        let s = Settings::resolve(Some(&path), SettingsOverrides::default()).unwrap();
        assert_eq!(s.model, dir.path().join("models/xgb.json"));
        assert_eq!(s.defaults, PathBuf::from(DEFAULT_DEFAULTS_PATH));
        assert_eq!(s.confidence, ConfidenceMode::PredictedClass);
    }

    #[test]
    fn file_without_paths_leaves_artifact_locations_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("renalrisk.json");
        fs::write(&path, r#"{ "confidence": "predicted-class" }"#).unwrap();

        let s = Settings::from_file(&path).unwrap();
        assert_eq!(s.model, PathBuf::from(DEFAULT_MODEL_PATH));
        assert_eq!(s.defaults, PathBuf::from(DEFAULT_DEFAULTS_PATH));
        assert_eq!(s.confidence, ConfidenceMode::PredictedClass);
    }

    #[test]
    fn absolute_file_paths_are_kept() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("renalrisk.json");
        let medians = dir.path().join("elsewhere").join("medians.json");
        let body = serde_json::json!({ "defaults": medians });
        fs::write(&path, body.to_string()).unwrap();

        let s = Settings::from_file(&path).unwrap();
        assert_eq!(s.defaults, medians);
        assert_eq!(s.model, PathBuf::from(DEFAULT_MODEL_PATH));
    }

    #[test]
    fn flags_override_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("renalrisk.json");
        fs::write(&path, r#"{ "confidence": "predicted-class" }"#).unwrap();

        let s = Settings::resolve(
            Some(&path),
            SettingsOverrides {
                model: Some(PathBuf::from("/opt/model.json")),
                defaults: None,
                confidence: Some(ConfidenceMode::PositiveClass),
            },
        )
        .unwrap();
        assert_eq!(s.model, PathBuf::from("/opt/model.json"));
        assert_eq!(s.confidence, ConfidenceMode::PositiveClass);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("renalrisk.json");
        fs::write(&path, r#"{ "modle": "typo.json" }"#).unwrap();
        let err = Settings::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("modle"), "msg was: {err:#}");
    }

    #[test]
    fn absent_settings_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(Settings::from_file(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn schema_describes_every_setting() {
        let v = serde_json::to_value(Settings::json_schema()).unwrap();
        let props = v.get("properties").and_then(Value::as_object).unwrap();
        for key in ["model", "defaults", "confidence"] {
            assert!(props.contains_key(key), "missing {key}");
        }
        assert_eq!(
            props["model"].get("title").and_then(Value::as_str),
            Some("Model artifact")
        );
        assert_eq!(
            props["model"].get("default").and_then(Value::as_str),
            Some(DEFAULT_MODEL_PATH)
        );
        let required = v.get("required").and_then(Value::as_array);
        assert!(required.is_none_or(|r| r.is_empty()), "no key is mandatory");
    }
}
