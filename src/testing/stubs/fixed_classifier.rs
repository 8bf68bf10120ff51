use crate::classifiers::Classifier;
use crate::classifiers::classifier::check_record;
use crate::core::{FeatureRecord, FeatureSchema};
use crate::error::PredictionError;

/// Returns the same label and P(1) for every record.
pub struct FixedClassifier {
    schema: FeatureSchema,
    label: u8,
    probability: f64,
}

impl FixedClassifier {
    pub fn new(schema: FeatureSchema, label: u8, probability: f64) -> Self {
        Self {
            schema,
            label,
            probability,
        }
    }
}

impl Classifier for FixedClassifier {
    fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    fn predict_proba(&self, batch: &[FeatureRecord]) -> Result<Vec<[f64; 2]>, PredictionError> {
        for r in batch {
            check_record(&self.schema, r)?;
        }
        Ok(vec![[1.0 - self.probability, self.probability]; batch.len()])
    }

    fn predict(&self, batch: &[FeatureRecord]) -> Result<Vec<u8>, PredictionError> {
        Ok(vec![self.label; batch.len()])
    }
}
