use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::config::SettingsOverrides;
use crate::core::FeatureInput;
use crate::prediction::ConfidenceMode;
use crate::ui::cli::form::untouched_inputs;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Chronic kidney disease risk check from ten clinical measurements"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score one patient without the interactive form
    Predict(PredictArgs),
    /// Show what the loaded model is and how it was built
    About,
    /// Print the JSON schema of the settings file
    ConfigSchema,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Settings file (JSON)
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Model artifact (overrides the settings file)
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub model: Option<PathBuf>,

    /// Default-values artifact (overrides the settings file)
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub defaults: Option<PathBuf>,

    /// Probability shown next to the verdict
    #[arg(long, global = true, value_enum, value_name = "MODE")]
    pub confidence: Option<ConfidenceMode>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            model: self.model.clone(),
            defaults: self.defaults.clone(),
            confidence: self.confidence,
        }
    }
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Feature value such as hemo=13.2 (repeatable; unset form fields are 0)
    #[arg(long = "value", value_name = "FEATURE=VALUE", value_parser = parse_feature_value)]
    pub values: Vec<FeatureValue>,

    /// Print the assessment as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeatureValue {
    pub feature: String,
    pub value: f64,
}

impl PredictArgs {
    pub fn to_input(&self) -> FeatureInput {
        let mut input = untouched_inputs();
        for fv in &self.values {
            input.insert(fv.feature.clone(), fv.value);
        }
        input
    }
}

fn parse_feature_value(raw: &str) -> Result<FeatureValue, String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| "expected FEATURE=VALUE".to_string())?;
    let key = key.trim();
    if key.is_empty() {
        return Err("feature cannot be empty".to_string());
    }

    let value = value.trim();
    let parsed: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if !parsed.is_finite() {
        return Err(format!("'{value}' is not a finite number"));
    }

    Ok(FeatureValue {
        feature: key.to_lowercase(),
        value: parsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("renalrisk").chain(args.iter().copied()))
            .expect("args parse")
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.global.verbose, 0);
    }

    #[test]
    fn predict_collects_repeated_values() {
        let cli = parse(&["predict", "--value", "hemo=13.2", "--value", " SC = 1.4 ", "--json"]);
        let Some(Command::Predict(args)) = cli.command else {
            panic!("expected predict");
        };
        assert!(args.json);
        assert_eq!(
            args.values,
            vec![
                FeatureValue {
                    feature: "hemo".into(),
                    value: 13.2
                },
                FeatureValue {
                    feature: "sc".into(),
                    value: 1.4
                },
            ]
        );

        let input = args.to_input();
        assert_eq!(input.get("hemo"), Some(13.2));
        assert_eq!(input.get("sc"), Some(1.4));
        assert_eq!(input.get("age"), Some(0.0));
    }

    #[test]
    fn predict_accepts_features_outside_the_form() {
        let cli = parse(&["predict", "--value", "bp=80"]);
        let Some(Command::Predict(args)) = cli.command else {
            panic!("expected predict");
        };
        let input = args.to_input();
        assert_eq!(input.get("bp"), Some(80.0));
        assert_eq!(input.iter().count(), 11);
    }

    #[test]
    fn non_numeric_value_is_rejected_by_the_parser() {
        let err = Cli::try_parse_from(["renalrisk", "predict", "--value", "hemo=high"]).unwrap_err();
        assert!(err.to_string().contains("not a number"), "msg was: {err}");

        assert!(Cli::try_parse_from(["renalrisk", "predict", "--value", "hemo"]).is_err());
        assert!(Cli::try_parse_from(["renalrisk", "predict", "--value", "=1"]).is_err());
        assert!(Cli::try_parse_from(["renalrisk", "predict", "--value", "sc=inf"]).is_err());
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = parse(&[
            "about",
            "--model",
            "m.json",
            "--confidence",
            "predicted-class",
            "-vv",
        ]);
        assert!(matches!(cli.command, Some(Command::About)));
        let o = cli.global.overrides();
        assert_eq!(o.model, Some(PathBuf::from("m.json")));
        assert_eq!(o.defaults, None);
        assert_eq!(o.confidence, Some(ConfidenceMode::PredictedClass));
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn parses_config_schema_command() {
        assert!(matches!(parse(&["config-schema"]).command, Some(Command::ConfigSchema)));
    }
}
