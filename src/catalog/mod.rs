use std::str::FromStr;

use strum::EnumMessage;
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

pub const TOP_FEATURES: [&str; 10] = [
    "hemo", "dm", "sg", "sc", "htn", "al", "rc", "bgr", "sod", "age",
];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr, EnumMessage,
)]
pub enum CatalogFeature {
    #[strum(serialize = "age", message = "Age", detailed_message = "Age of the patient (in years)")]
    Age,
    #[strum(serialize = "su", message = "Sugar", detailed_message = "Urine sugar content")]
    Sugar,
    #[strum(serialize = "rbc", message = "Red Blood Cells", detailed_message = "Red blood cell count")]
    RedBloodCells,
    #[strum(serialize = "pc", message = "Pus Cells", detailed_message = "Presence of pus cells")]
    PusCells,
    #[strum(serialize = "al", message = "Albumin", detailed_message = "Albumin level in urine")]
    Albumin,
    #[strum(
        serialize = "pcc",
        message = "Pus Cell Clumps",
        detailed_message = "Clumped pus cells presence"
    )]
    PusCellClumps,
    #[strum(
        serialize = "bgr",
        message = "Blood Glucose Random",
        detailed_message = "Random blood glucose level"
    )]
    BloodGlucoseRandom,
    #[strum(serialize = "bu", message = "Blood Urea", detailed_message = "Amount of urea in blood")]
    BloodUrea,
    #[strum(
        serialize = "sc",
        message = "Serum Creatinine",
        detailed_message = "Kidney filtration indicator"
    )]
    SerumCreatinine,
    #[strum(serialize = "sod", message = "Sodium", detailed_message = "Sodium level in blood")]
    Sodium,
    #[strum(serialize = "pot", message = "Potassium", detailed_message = "Potassium level in blood")]
    Potassium,
    #[strum(serialize = "hemo", message = "Hemoglobin", detailed_message = "Hemoglobin concentration")]
    Hemoglobin,
    #[strum(
        serialize = "wc",
        message = "White Blood Cell Count",
        detailed_message = "WBC count per mm3"
    )]
    WhiteBloodCellCount,
    #[strum(
        serialize = "rc",
        message = "Red Blood Cell Count",
        detailed_message = "RBC count per mm3"
    )]
    RedBloodCellCount,
    #[strum(
        serialize = "htn",
        message = "Hypertension",
        detailed_message = "High blood pressure history (1/0)"
    )]
    Hypertension,
    #[strum(
        serialize = "dm",
        message = "Diabetes Mellitus",
        detailed_message = "Diabetes history (1/0)"
    )]
    DiabetesMellitus,
    #[strum(
        serialize = "cad",
        message = "Coronary Artery Disease",
        detailed_message = "CAD history (1/0)"
    )]
    CoronaryArteryDisease,
    #[strum(serialize = "appet", message = "Appetite", detailed_message = "Normal or poor (1/0)")]
    Appetite,
    #[strum(serialize = "pe", message = "Pedal Edema", detailed_message = "Swelling in legs (1/0)")]
    PedalEdema,
    #[strum(serialize = "ane", message = "Anemia", detailed_message = "Anemic condition (1/0)")]
    Anemia,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDescription<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub help: &'a str,
}

/// Features without a catalog entry fall back to their identifier and no help.
pub fn describe(id: &str) -> FeatureDescription<'_> {
    match CatalogFeature::from_str(id) {
        Ok(feature) => FeatureDescription {
            id,
            label: feature.get_message().unwrap_or(id),
            help: feature.get_detailed_message().unwrap_or(""),
        },
        Err(_) => FeatureDescription {
            id,
            label: id,
            help: "",
        },
    }
}
