use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::EnumMessage;
use strum_macros::{Display, EnumDiscriminants, EnumMessage, IntoStaticStr};

use crate::artifacts::read_json;
use crate::classifiers::{
    ClassifierRef, LogisticModel, LogisticParams, TreeEnsemble, TreeEnsembleParams,
};
use crate::core::FeatureSchema;
use crate::error::{ArtifactError, ArtifactKind};

pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ModelKind))]
#[strum_discriminants(derive(Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ModelSpec {
    #[strum_discriminants(strum(
        message = "Gradient-boosted trees",
        detailed_message = "Sum of regression trees in log-odds space."
    ))]
    TreeEnsemble(TreeEnsembleParams),
    #[strum_discriminants(strum(
        message = "Logistic regression",
        detailed_message = "Weighted sum of features in log-odds space."
    ))]
    Logistic(LogisticParams),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub trained_with: Option<String>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub schema_version: u32,
    pub feature_names: Vec<String>,
    pub model: ModelSpec,
    #[serde(default)]
    pub metadata: ModelMetadata,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    pub kind: ModelKind,
    pub summary: String,
    pub metadata: ModelMetadata,
}

impl ModelInfo {
    pub fn kind_label(&self) -> &'static str {
        self.kind.get_message().unwrap_or_else(|| self.kind.into())
    }
}

impl ModelArtifact {
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        read_json(ArtifactKind::Model, path)
    }

    pub fn into_classifier(self) -> Result<(ClassifierRef, ModelInfo), ArtifactError> {
        if self.schema_version != SUPPORTED_SCHEMA_VERSION {
            return Err(ArtifactError::UnsupportedSchemaVersion {
                found: self.schema_version,
                expected: SUPPORTED_SCHEMA_VERSION,
            });
        }

        let schema = FeatureSchema::new(self.schema_version, self.feature_names)?;
        let kind = ModelKind::from(&self.model);

        let (classifier, summary): (ClassifierRef, String) = match self.model {
            ModelSpec::TreeEnsemble(params) => {
                let model = TreeEnsemble::new(schema, params)?;
                let summary = format!(
                    "{} trees, max depth {}",
                    model.number_of_trees(),
                    model.max_depth()
                );
                (Box::new(model), summary)
            }
            ModelSpec::Logistic(params) => {
                let n = params.coefficients.len();
                let model = LogisticModel::new(schema, params)?;
                (Box::new(model), format!("{n} coefficients"))
            }
        };

        Ok((
            classifier,
            ModelInfo {
                kind,
                summary,
                metadata: self.metadata,
            },
        ))
    }
}
