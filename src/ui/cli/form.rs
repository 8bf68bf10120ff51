use anyhow::{Context, Result};

use crate::catalog::{TOP_FEATURES, describe};
use crate::core::FeatureInput;
use crate::ui::cli::drivers::PromptDriver;

pub const FIELD_STEP: f64 = 0.1;
pub const FIELD_DEFAULT: f64 = 0.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub id: &'static str,
    pub label: String,
    pub help: String,
}

pub fn form_fields() -> Vec<FormField> {
    TOP_FEATURES
        .iter()
        .map(|&id| {
            let d = describe(id);
            let help = if d.help.is_empty() {
                format!("step {FIELD_STEP}")
            } else {
                format!("{} (step {FIELD_STEP})", d.help)
            };
            FormField {
                id,
                label: d.label.to_string(),
                help,
            }
        })
        .collect()
}

pub fn collect_inputs<D: PromptDriver>(driver: &D, fields: &[FormField]) -> Result<FeatureInput> {
    let mut input = FeatureInput::new();
    for field in fields {
        let value = driver
            .ask_f64(&field.label, &field.help, FIELD_DEFAULT)
            .with_context(|| format!("failed while prompting for {}", field.id))?;
        input.insert(field.id, value);
    }
    Ok(input)
}

pub fn untouched_inputs() -> FeatureInput {
    TOP_FEATURES.iter().map(|id| (*id, FIELD_DEFAULT)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{Answer, ScriptedDriver};

    #[test]
    fn exactly_ten_fields_in_importance_order() {
        let fields = form_fields();
        assert_eq!(fields.len(), 10);
        assert_eq!(fields[0].id, "hemo");
        assert_eq!(fields[0].label, "Hemoglobin");
        assert_eq!(fields[0].help, "Hemoglobin concentration (step 0.1)");
        assert_eq!(fields[9].id, "age");
    }

    #[test]
    fn field_without_catalog_entry_uses_its_id() {
        let sg = form_fields().into_iter().find(|f| f.id == "sg").unwrap();
        assert_eq!(sg.label, "sg");
        assert_eq!(sg.help, "step 0.1");
    }

    #[test]
    fn untouched_fields_default_to_zero() {
        let mut answers = vec![Answer::Number(13.2)];
        answers.extend(std::iter::repeat_n(Answer::Default, 9));
        let driver = ScriptedDriver::new(answers);

        let input = collect_inputs(&driver, &form_fields()).unwrap();
        assert_eq!(input.iter().count(), 10);
        assert_eq!(input.get("hemo"), Some(13.2));
        assert_eq!(input.get("age"), Some(0.0));
        assert_eq!(driver.asked()[1], "Diabetes Mellitus");
    }

    #[test]
    fn prompt_failure_names_the_field() {
        let driver = ScriptedDriver::new(vec![Answer::Number(1.0)]);
        let err = collect_inputs(&driver, &form_fields()).unwrap_err();
        assert!(err.to_string().contains("dm"), "msg was: {err}");
    }

    #[test]
    fn untouched_inputs_cover_every_form_field() {
        let input = untouched_inputs();
        assert_eq!(input.iter().count(), TOP_FEATURES.len());
        assert!(input.iter().all(|(_, v)| v == 0.0));
    }
}
