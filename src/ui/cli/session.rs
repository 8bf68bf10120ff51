use std::io::Write;

use anyhow::Result;
use tracing::{info, warn};

use crate::artifacts::ArtifactStore;
use crate::prediction::{ConfidenceMode, assess};
use crate::ui::cli::drivers::{PromptDriver, is_cancellation};
use crate::ui::cli::form::{collect_inputs, form_fields};
use crate::ui::render::{render_assessment, render_failure};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub predictions: usize,
    pub failures: usize,
}

/// A failed prediction is shown and the loop goes on. Esc or Ctrl-C at any
/// prompt ends the session normally.
pub fn run_session<D: PromptDriver, W: Write>(
    driver: &D,
    store: &ArtifactStore,
    mode: ConfidenceMode,
    out: &mut W,
) -> Result<SessionSummary> {
    let fields = form_fields();
    let mut summary = SessionSummary::default();

    loop {
        let input = match collect_inputs(driver, &fields) {
            Ok(input) => input,
            Err(err) if is_cancellation(&err) => break,
            Err(err) => return Err(err),
        };

        match assess(store, &input, mode) {
            Ok(assessment) => {
                summary.predictions += 1;
                writeln!(out, "\n{}\n", render_assessment(&assessment))?;
            }
            Err(err) => {
                summary.failures += 1;
                warn!(error = %err, "prediction failed");
                writeln!(out, "\n{}\n", render_failure(&err))?;
            }
        }
        out.flush()?;

        match driver.ask_bool("Run another prediction?", "", false) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) if is_cancellation(&err) => break,
            Err(err) => return Err(err),
        }
    }

    if summary.predictions + summary.failures == 0 {
        info!("session cancelled before any prediction");
    }

    Ok(summary)
}
