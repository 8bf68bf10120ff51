use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use renalrisk::artifacts::ArtifactStore;
use renalrisk::catalog::TOP_FEATURES;
use renalrisk::config::Settings;
use renalrisk::prediction::assess;
use renalrisk::ui::cli::args::{Cli, Command, GlobalArgs, PredictArgs};
use renalrisk::ui::cli::drivers::InquireDriver;
use renalrisk::ui::cli::session::run_session;
use renalrisk::ui::render::{header, render_about, render_assessment, render_failure};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    renalrisk::logging::init(cli.global.verbose);

    match &cli.command {
        Some(Command::ConfigSchema) => {
            let schema = serde_json::to_string_pretty(&Settings::json_schema())
                .context("failed to serialize settings schema")?;
            println!("{schema}");
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Predict(args)) => {
            let (settings, store) = load(&cli.global)?;
            run_scripted(&store, &settings, args)
        }
        Some(Command::About) => {
            let (_, store) = load(&cli.global)?;
            println!(
                "{}",
                render_about(store.info(), store.schema(), TOP_FEATURES.len())
            );
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let (settings, store) = load(&cli.global)?;
            run_interactive(&store, &settings)
        }
    }
}

fn load(global: &GlobalArgs) -> Result<(Settings, ArtifactStore)> {
    let settings = Settings::resolve(global.config.as_deref(), global.overrides())
        .context("failed to resolve settings")?;
    let store = ArtifactStore::load(&settings.artifact_paths())
        .context("failed to load model artifacts")?;
    Ok((settings, store))
}

fn run_interactive(store: &ArtifactStore, settings: &Settings) -> Result<ExitCode> {
    for line in header() {
        println!("{line}");
    }
    println!();

    let mut stdout = io::stdout().lock();
    let summary = run_session(&InquireDriver, store, settings.confidence, &mut stdout)
        .context("interactive session failed")?;
    info!(
        predictions = summary.predictions,
        failures = summary.failures,
        "session finished"
    );
    Ok(ExitCode::SUCCESS)
}

fn run_scripted(store: &ArtifactStore, settings: &Settings, args: &PredictArgs) -> Result<ExitCode> {
    let input = args.to_input();
    let mut stdout = io::stdout().lock();

    match assess(store, &input, settings.confidence) {
        Ok(assessment) => {
            if args.json {
                serde_json::to_writer_pretty(&mut stdout, &assessment)
                    .context("failed to write assessment")?;
                writeln!(stdout)?;
            } else {
                writeln!(stdout, "{}", render_assessment(&assessment))?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            warn!(error = %err, "prediction failed");
            writeln!(stdout, "{}", render_failure(&err))?;
            Ok(ExitCode::from(2))
        }
    }
}
