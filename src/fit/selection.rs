//! Estimator runs and comparison.
//!
//! For each requested estimator we compute the empirical points and fit both
//! distributions to them. When several estimators are requested, the one whose
//! Weibull fit has the highest index of fit is marked as best; estimators that
//! cannot produce a fit are reported as skipped rather than failing the run.

use tracing::{debug, warn};

use crate::dist::{Exponential, Weibull};
use crate::domain::{Event, Fit, Method, MethodSpec, Point};
use crate::error::FitError;
use crate::estimate::estimate;
use crate::fit::fitter::{fit_exponential, fit_weibull};

/// Estimator output and both fits for one method.
#[derive(Debug, Clone)]
pub struct MethodFit {
    pub method: Method,
    pub points: Vec<Point>,
    pub weibull: Fit<Weibull>,
    pub exponential: Fit<Exponential>,
}

/// Output of fitting + selection.
#[derive(Debug, Clone)]
pub struct FitSelection {
    /// Index into `fits` of the preferred estimator.
    pub best: usize,
    /// Fits for all estimators that succeeded, in request order.
    pub fits: Vec<MethodFit>,
    /// Estimators that were skipped and why (for diagnostics).
    pub skipped: Vec<(Method, FitError)>,
}

impl FitSelection {
    pub fn best(&self) -> &MethodFit {
        &self.fits[self.best]
    }
}

/// Estimate the survival function with `method` and fit both distributions.
pub fn fit_method(method: Method, events: &[Event]) -> Result<MethodFit, FitError> {
    let points = estimate(method, events)?;
    debug!(method = method.display_name(), points = points.len(), "estimated survival");

    let weibull = fit_weibull(&points)?;
    let exponential = fit_exponential(&points)?;

    Ok(MethodFit {
        method,
        points,
        weibull,
        exponential,
    })
}

/// Run every estimator named by the selector and pick the best one.
///
/// A single explicitly requested estimator propagates its error. With
/// `MethodSpec::All`, failures are collected in `skipped` and an error is only
/// returned when no estimator succeeds.
pub fn fit_and_select(events: &[Event], spec: MethodSpec) -> Result<FitSelection, FitError> {
    let mut fits = Vec::new();
    let mut skipped = Vec::new();

    for method in spec.methods() {
        match fit_method(method, events) {
            Ok(fit) => fits.push(fit),
            Err(err) if spec == MethodSpec::All => {
                warn!(method = method.display_name(), %err, "skipping estimator");
                skipped.push((method, err));
            }
            Err(err) => return Err(err),
        }
    }

    if fits.is_empty() {
        return Err(skipped
            .into_iter()
            .next()
            .map(|(_, err)| err)
            .unwrap_or(FitError::InsufficientData {
                expected: 1,
                actual: 0,
            }));
    }

    let best = select_by_r(&fits);
    Ok(FitSelection {
        best,
        fits,
        skipped,
    })
}

/// Highest Weibull index of fit; ties keep the earliest estimator.
fn select_by_r(fits: &[MethodFit]) -> usize {
    let mut best = 0;
    for (i, f) in fits.iter().enumerate().skip(1) {
        if f.weibull.r > fits[best].weibull.r {
            best = i;
        }
    }
    best
}
