//! Shared "fit pipeline" logic.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! read events -> estimate -> fit Weibull/Exponential -> compare estimators
//!
//! The CLI can then focus on presentation.

use std::io::Read;

use tracing::{info, instrument};

use crate::domain::{Event, RunConfig};
use crate::error::AppError;
use crate::fit::{FitSelection, fit_and_select};
use crate::io::{MethodRecord, RunFile};

/// All computed outputs of a single `lf fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub events: usize,
    pub selection: FitSelection,
}

/// Read events from the configured file, or stdin when none is given.
pub fn load_events(config: &RunConfig) -> Result<Vec<Event>, AppError> {
    match &config.input {
        Some(path) => crate::io::load_events(path),
        None => read_events_from(std::io::stdin().lock()),
    }
}

fn read_events_from(reader: impl Read) -> Result<Vec<Event>, AppError> {
    Ok(crate::io::read_events(reader)?)
}

/// Execute estimation + fitting for the configured estimator(s).
#[instrument(skip_all, fields(events = events.len(), method = ?config.method_spec))]
pub fn run_fit(events: &[Event], config: &RunConfig) -> Result<RunOutput, AppError> {
    let selection = fit_and_select(events, config.method_spec)?;

    let best = selection.best();
    info!(
        method = best.method.display_name(),
        beta = best.weibull.distribution.shape(),
        theta = best.weibull.distribution.scale(),
        rate = best.exponential.distribution.rate(),
        "fit complete"
    );

    Ok(RunOutput {
        events: events.len(),
        selection,
    })
}

/// Build the export record of a run.
pub fn to_run_file(run: &RunOutput) -> RunFile {
    RunFile {
        tool: "lf".to_string(),
        events: run.events,
        best: run.selection.best().method,
        methods: run.selection.fits.iter().map(MethodRecord::from).collect(),
    }
}
