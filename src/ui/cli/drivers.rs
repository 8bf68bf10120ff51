use anyhow::Result;
use inquire::{Confirm, CustomType, InquireError};

pub trait PromptDriver {
    fn ask_f64(&self, title: &str, help: &str, default: f64) -> Result<f64>;
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool>;
}

pub struct InquireDriver;

impl PromptDriver for InquireDriver {
    fn ask_f64(&self, title: &str, help: &str, default: f64) -> Result<f64> {
        let mut prompt = CustomType::<f64>::new(title)
            .with_default(default)
            .with_parser(&|s| parse_finite(s).ok_or(()))
            .with_formatter(&|v| format!("{v:.2}"))
            .with_default_value_formatter(&|v| format!("{v:.2}"))
            .with_error_message("Please type a number (e.g. 12.50)");
        if !help.is_empty() {
            prompt = prompt.with_help_message(help);
        }
        Ok(prompt.prompt()?)
    }

    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        let mut prompt = Confirm::new(title).with_default(default);
        if !help.is_empty() {
            prompt = prompt.with_help_message(help);
        }
        Ok(prompt.prompt()?)
    }
}

/// `NaN` and the infinities parse as `f64` but are not measurements.
pub fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn is_cancellation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn prompt_parser_rejects_non_finite_numbers() {
        for raw in ["NaN", "nan", "inf", "-infinity", "abc", ""] {
            assert_eq!(parse_finite(raw), None, "{raw:?} should be rejected");
        }
        assert_eq!(parse_finite(" 12.5 "), Some(12.5));
        assert_eq!(parse_finite("-0.1"), Some(-0.1));
    }

    #[test]
    fn cancellation_is_recognised_through_context() {
        let esc: anyhow::Error = InquireError::OperationCanceled.into();
        assert!(is_cancellation(&esc));

        let ctrl_c = Err::<(), _>(InquireError::OperationInterrupted)
            .context("failed while prompting for hemo")
            .unwrap_err();
        assert!(is_cancellation(&ctrl_c));

        let other: anyhow::Error = InquireError::NotTTY.into();
        assert!(!is_cancellation(&other));
    }
}
