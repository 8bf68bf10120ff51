use tracing::debug;

use crate::artifacts::DefaultValueTable;
use crate::core::{FeatureInput, FeatureRecord, FeatureSchema};
use crate::error::PredictionError;

/// Builds the full model row from what the user entered.
///
/// Walks the schema in order, taking the user's value where there is one and
/// the default otherwise. A feature with neither is an error; it is never
/// filled with zero. Entered features the schema does not know are dropped.
pub fn vectorize(
    input: &FeatureInput,
    schema: &FeatureSchema,
    defaults: &DefaultValueTable,
) -> Result<FeatureRecord, PredictionError> {
    let mut record = FeatureRecord::with_capacity(schema.len());

    for feature in schema.iter() {
        let value = input
            .get(feature)
            .or_else(|| defaults.get(feature))
            .ok_or_else(|| PredictionError::MissingFeature {
                feature: feature.to_string(),
            })?;
        record.push(feature, value);
    }

    for (feature, _) in input.iter().filter(|(f, _)| !schema.contains(f)) {
        debug!(feature, "ignoring input feature unknown to the model");
    }

    Ok(record)
}
