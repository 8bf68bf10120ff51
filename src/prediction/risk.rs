use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::EnumMessage;
use strum_macros::{Display, EnumIter, EnumMessage, IntoStaticStr};

use crate::prediction::predictor::PredictionResult;

pub const HIGH_RISK_THRESHOLD: f64 = 0.85;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr, EnumIter, EnumMessage,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RiskTier {
    #[strum(message = "No CKD Detected.")]
    NoRisk,
    #[strum(message = "Possible CKD.")]
    PossibleRisk,
    #[strum(message = "High Risk of CKD!")]
    HighRisk,
}

impl RiskTier {
    pub fn classify(result: &PredictionResult) -> RiskTier {
        match result.label {
            0 => RiskTier::NoRisk,
            _ if result.probability >= HIGH_RISK_THRESHOLD => RiskTier::HighRisk,
            _ => RiskTier::PossibleRisk,
        }
    }

    pub fn headline(&self) -> &'static str {
        self.get_message().unwrap_or_else(|| (*self).into())
    }
}

/// `PositiveClass` always shows P(CKD), including for a negative verdict.
/// `PredictedClass` shows the probability of the class that was predicted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ConfidenceMode {
    #[default]
    PositiveClass,
    PredictedClass,
}

impl ConfidenceMode {
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceMode::PositiveClass => "P(CKD)",
            ConfidenceMode::PredictedClass => "Confidence",
        }
    }

    pub fn reported_probability(&self, result: &PredictionResult) -> f64 {
        match self {
            ConfidenceMode::PredictedClass if result.label == 0 => 1.0 - result.probability,
            _ => result.probability,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    pub label: u8,
    pub probability: f64,
    pub confidence_mode: ConfidenceMode,
    pub confidence: f64,
    pub message: String,
}

impl RiskAssessment {
    pub fn new(result: PredictionResult, mode: ConfidenceMode) -> Self {
        let tier = RiskTier::classify(&result);
        let confidence = mode.reported_probability(&result);
        let message = format!(
            "{} ({}: {})",
            tier.headline(),
            mode.label(),
            format_percent(confidence)
        );

        RiskAssessment {
            tier,
            label: result.label,
            probability: result.probability,
            confidence_mode: mode,
            confidence,
            message,
        }
    }
}

pub fn format_percent(p: f64) -> String {
    format!("{:.2}%", p * 100.0)
}
