use chrono::{Local, SecondsFormat};

use crate::artifacts::ModelInfo;
use crate::core::FeatureSchema;
use crate::error::PredictionError;
use crate::prediction::{RiskAssessment, RiskTier, format_percent};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_CYAN: &str = "\x1b[36m";
pub const FG_GREY: &str = "\x1b[90m";

const RULE: &str = "────────────────────────────────────────────────────────────";

pub fn header() -> Vec<String> {
    vec![
        format!("{BOLD}{FG_CYAN}▶ Chronic Kidney Disease (CKD) Predictor{RESET}"),
        format!("{DIM}Enter your details below to check your CKD risk.{RESET}  {}", timestamp_now()),
        format!("{FG_GREY}{RULE}{RESET}"),
    ]
}

pub fn render_assessment(a: &RiskAssessment) -> String {
    let (color, icon) = match a.tier {
        RiskTier::HighRisk => (FG_RED, "🛑"),
        RiskTier::PossibleRisk => (FG_YELLOW, "⚠️"),
        RiskTier::NoRisk => (FG_GREEN, "✅"),
    };
    format!("{color}{BOLD}{icon} {}{RESET}", a.message)
}

pub fn render_failure(err: &PredictionError) -> String {
    format!("{FG_RED}✗ Prediction failed: {err}{RESET}")
}

pub fn render_about(info: &ModelInfo, schema: &FeatureSchema, input_fields: usize) -> String {
    let meta = &info.metadata;
    let mut lines = vec![
        format!("{BOLD}{FG_CYAN}ℹ About this app{RESET}"),
        format!("{FG_GREY}{RULE}{RESET}"),
        format!(
            "  {BOLD}Model{RESET}         {}{}",
            meta.name.as_deref().map(|n| format!("{n}: ")).unwrap_or_default(),
            info.kind_label()
        ),
        format!("  {BOLD}Structure{RESET}     {}", info.summary),
    ];

    if let Some(tool) = &meta.trained_with {
        lines.push(format!("  {BOLD}Trained with{RESET}  {tool}"));
    }
    if let Some(acc) = meta.accuracy {
        lines.push(format!("  {BOLD}Accuracy{RESET}      {}", format_percent(acc)));
    }
    lines.push(format!(
        "  {BOLD}Input fields{RESET}  {input_fields} of {} model features",
        schema.len()
    ));
    lines.push(format!(
        "  {BOLD}Schema{RESET}        v{}: {}",
        schema.version(),
        schema.names().join(", ")
    ));
    if let Some(purpose) = &meta.purpose {
        lines.push(format!("  {BOLD}Purpose{RESET}       {purpose}"));
    }
    if let Some(authors) = &meta.authors {
        lines.push(format!("  {BOLD}Developer{RESET}     {authors}"));
    }

    lines.join("\n")
}

fn timestamp_now() -> String {
    let now = Local::now();
    format!(
        "{DIM}{}{}",
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
        RESET
    )
}
