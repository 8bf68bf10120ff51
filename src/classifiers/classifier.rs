use crate::core::{FeatureRecord, FeatureSchema};
use crate::error::PredictionError;

pub const DECISION_THRESHOLD: f64 = 0.5;

pub trait Classifier {
    fn schema(&self) -> &FeatureSchema;

    fn predict_proba(&self, batch: &[FeatureRecord]) -> Result<Vec<[f64; 2]>, PredictionError>;

    fn predict(&self, batch: &[FeatureRecord]) -> Result<Vec<u8>, PredictionError> {
        Ok(self
            .predict_proba(batch)?
            .into_iter()
            .map(|p| label_for(p[1]))
            .collect())
    }
}

pub type ClassifierRef = Box<dyn Classifier + Send + Sync>;

#[inline]
pub fn label_for(positive_probability: f64) -> u8 {
    u8::from(positive_probability > DECISION_THRESHOLD)
}

#[inline]
pub fn sigmoid(margin: f64) -> f64 {
    1.0 / (1.0 + (-margin).exp())
}

pub fn check_record(schema: &FeatureSchema, record: &FeatureRecord) -> Result<(), PredictionError> {
    if record.len() != schema.len() {
        return Err(PredictionError::FeatureCount {
            expected: schema.len(),
            found: record.len(),
        });
    }

    for (position, (expected, found)) in schema.iter().zip(record.names()).enumerate() {
        if expected != found {
            return Err(PredictionError::SchemaOrder {
                position,
                expected: expected.to_string(),
                found: found.clone(),
            });
        }
    }

    Ok(())
}

pub(crate) fn check_batch(schema: &FeatureSchema, batch: &[FeatureRecord]) -> Result<(), PredictionError> {
    if batch.is_empty() {
        return Err(PredictionError::EmptyBatch);
    }
    batch.iter().try_for_each(|r| check_record(schema, r))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FeatureSchema {
        FeatureSchema::new(1, vec!["age".into(), "hemo".into()]).unwrap()
    }

    #[test]
    fn sigmoid_is_centered_and_symmetric() {
        assert_eq!(sigmoid(0.0), 0.5);
        let a = sigmoid(2.0);
        let b = sigmoid(-2.0);
        assert!((a + b - 1.0).abs() < 1e-12);
        assert!(a > 0.88 && a < 0.881);
    }

    #[test]
    fn label_requires_strictly_more_than_half() {
        assert_eq!(label_for(0.5), 0);
        assert_eq!(label_for(0.500_001), 1);
        assert_eq!(label_for(0.1), 0);
    }

    #[test]
    fn check_record_reports_the_first_misplaced_feature() {
        let mut r = FeatureRecord::default();
        r.push("hemo", 12.0);
        r.push("age", 40.0);
        let err = check_record(&schema(), &r).unwrap_err();
        assert_eq!(
            err,
            PredictionError::SchemaOrder {
                position: 0,
                expected: "age".into(),
                found: "hemo".into(),
            }
        );
    }

    #[test]
    fn check_record_reports_wrong_length() {
        let mut r = FeatureRecord::default();
        r.push("age", 40.0);
        assert_eq!(
            check_record(&schema(), &r).unwrap_err(),
            PredictionError::FeatureCount {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn check_batch_rejects_empty_batches() {
        assert_eq!(
            check_batch(&schema(), &[]).unwrap_err(),
            PredictionError::EmptyBatch
        );
    }
}
