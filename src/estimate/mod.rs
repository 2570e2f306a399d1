//! Non-parametric survival-function estimators.
//!
//! Every estimator consumes the full event batch and returns points sorted by
//! time, starting with the synthetic `(0, 1)` sample.
//!
//! - [`complete`]: DM / IDM / MRM, rank formulas on failures only
//! - [`product_limit`]: Kaplan-Meier style product with censoring

pub mod complete;
pub mod product_limit;

pub use complete::*;
pub use product_limit::*;

use tracing::debug;

use crate::domain::{Event, Method, Point};
use crate::error::FitError;

/// Run the selected estimator.
pub fn estimate(method: Method, events: &[Event]) -> Result<Vec<Point>, FitError> {
    if !method.uses_censoring() {
        let censored = events.iter().filter(|e| !e.is_failure()).count();
        if censored > 0 {
            debug!(method = method.display_name(), censored, "ignoring censored events");
        }
    }

    match method {
        Method::Dm => estimate_dm(events),
        Method::Idm => estimate_idm(events),
        Method::Mrm => estimate_mrm(events),
        Method::Ple => estimate_ple(events),
    }
}

/// Reject negative or non-finite times and batches without a single failure.
fn validate_events(events: &[Event]) -> Result<usize, FitError> {
    if let Some(e) = events.iter().find(|e| !(e.time.is_finite() && e.time >= 0.0)) {
        return Err(FitError::InvalidInput(format!(
            "event time must be finite and >= 0, got {}",
            e.time
        )));
    }
    let failures = events.iter().filter(|e| e.is_failure()).count();
    if failures == 0 {
        return Err(FitError::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }
    Ok(failures)
}

/// Stable ascending sort by time, with a synthetic zero-time event in front.
fn with_origin_sorted(events: impl Iterator<Item = Event>) -> Vec<Event> {
    // The origin is neither a failure nor a censoring; its kind is never read.
    let mut sorted = vec![Event::censored(0.0)];
    sorted.extend(events);
    sorted.sort_by(|a, b| a.time.total_cmp(&b.time));
    sorted
}
