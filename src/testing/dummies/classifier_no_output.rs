use crate::classifiers::Classifier;
use crate::core::{FeatureRecord, FeatureSchema};
use crate::error::PredictionError;

pub struct ClassifierNoOutput {
    schema: FeatureSchema,
}

impl ClassifierNoOutput {
    pub fn new(schema: FeatureSchema) -> Self {
        Self { schema }
    }
}

impl Classifier for ClassifierNoOutput {
    fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    fn predict_proba(&self, _batch: &[FeatureRecord]) -> Result<Vec<[f64; 2]>, PredictionError> {
        Ok(Vec::new())
    }
}
