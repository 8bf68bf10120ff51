mod predictor;
mod risk;
mod vectorizer;

pub use predictor::{PredictionResult, Predictor};
pub use risk::{ConfidenceMode, HIGH_RISK_THRESHOLD, RiskAssessment, RiskTier, format_percent};
pub use vectorizer::vectorize;

use tracing::debug;

use crate::artifacts::ArtifactStore;
use crate::core::FeatureInput;
use crate::error::PredictionError;

pub fn assess(
    store: &ArtifactStore,
    input: &FeatureInput,
    mode: ConfidenceMode,
) -> Result<RiskAssessment, PredictionError> {
    let record = vectorize(input, store.schema(), store.defaults())?;
    let result = Predictor::new(store.classifier()).predict(&record)?;
    let assessment = RiskAssessment::new(result, mode);

    debug!(
        label = result.label,
        probability = result.probability,
        tier = %assessment.tier,
        "prediction complete"
    );
    Ok(assessment)
}
