use std::sync::{Arc, Mutex};

use crate::classifiers::Classifier;
use crate::core::{FeatureRecord, FeatureSchema};
use crate::error::PredictionError;

pub struct BatchSpyHandle(Arc<Mutex<Vec<usize>>>);

impl BatchSpyHandle {
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.0.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

pub struct BatchSpyClassifier {
    schema: FeatureSchema,
    sizes: Arc<Mutex<Vec<usize>>>,
}

impl BatchSpyClassifier {
    pub fn new(schema: FeatureSchema) -> (Self, BatchSpyHandle) {
        let sizes = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                schema,
                sizes: sizes.clone(),
            },
            BatchSpyHandle(sizes),
        )
    }
}

impl Classifier for BatchSpyClassifier {
    fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    fn predict_proba(&self, batch: &[FeatureRecord]) -> Result<Vec<[f64; 2]>, PredictionError> {
        if let Ok(mut sizes) = self.sizes.lock() {
            sizes.push(batch.len());
        }
        Ok(vec![[0.5, 0.5]; batch.len()])
    }
}
