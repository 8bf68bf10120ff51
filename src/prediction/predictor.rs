use std::slice;

use serde::Serialize;

use crate::classifiers::Classifier;
use crate::classifiers::classifier::check_record;
use crate::core::FeatureRecord;
use crate::error::PredictionError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub label: u8,
    pub probability: f64,
}

pub struct Predictor<'a> {
    classifier: &'a dyn Classifier,
}

impl<'a> Predictor<'a> {
    pub fn new(classifier: &'a dyn Classifier) -> Self {
        Predictor { classifier }
    }

    pub fn predict(&self, record: &FeatureRecord) -> Result<PredictionResult, PredictionError> {
        check_record(self.classifier.schema(), record)?;

        let batch = slice::from_ref(record);
        let label = first(self.classifier.predict(batch)?)?;
        let probability = first(self.classifier.predict_proba(batch)?)?[1];

        if label > 1 {
            return Err(PredictionError::InvalidLabel(label));
        }
        if !(0.0..=1.0).contains(&probability) {
            return Err(PredictionError::InvalidProbability(probability));
        }

        Ok(PredictionResult { label, probability })
    }
}

fn first<T>(outputs: Vec<T>) -> Result<T, PredictionError> {
    outputs.into_iter().next().ok_or(PredictionError::EmptyBatch)
}
