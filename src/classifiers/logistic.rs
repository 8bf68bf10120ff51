use serde::{Deserialize, Serialize};

use crate::classifiers::classifier::{Classifier, check_batch, sigmoid};
use crate::core::{FeatureRecord, FeatureSchema};
use crate::error::{ArtifactError, PredictionError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticParams {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct LogisticModel {
    schema: FeatureSchema,
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LogisticModel {
    pub fn new(schema: FeatureSchema, params: LogisticParams) -> Result<Self, ArtifactError> {
        if params.coefficients.len() != schema.len() {
            return Err(ArtifactError::InvalidModel(format!(
                "logistic model has {} coefficients for {} features",
                params.coefficients.len(),
                schema.len()
            )));
        }
        if !params.intercept.is_finite() || params.coefficients.iter().any(|w| !w.is_finite()) {
            return Err(ArtifactError::InvalidModel(
                "logistic model has non-finite weights".to_string(),
            ));
        }

        Ok(LogisticModel {
            schema,
            intercept: params.intercept,
            coefficients: params.coefficients,
        })
    }

    pub fn margin(&self, values: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(values)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }
}

impl Classifier for LogisticModel {
    fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    fn predict_proba(&self, batch: &[FeatureRecord]) -> Result<Vec<[f64; 2]>, PredictionError> {
        check_batch(&self.schema, batch)?;
        Ok(batch
            .iter()
            .map(|r| {
                let p = sigmoid(self.margin(r.values()));
                [1.0 - p, p]
            })
            .collect())
    }
}
