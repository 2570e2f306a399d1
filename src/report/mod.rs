//! Reporting utilities: fitted-vs-empirical rows and formatted terminal output.

pub mod format;

pub use format::*;

use crate::dist::Lifetime;
use crate::fit::MethodFit;

/// Empirical survival next to both fitted survival curves at one time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurvivalRow {
    pub t: f64,
    pub empirical: f64,
    pub weibull: f64,
    pub exponential: f64,
}

/// Evaluate both fits at every empirical point.
pub fn survival_rows(fit: &MethodFit) -> Vec<SurvivalRow> {
    fit.points
        .iter()
        .map(|p| SurvivalRow {
            t: p.x,
            empirical: p.y,
            weibull: fit.weibull.distribution.survival(p.x),
            exponential: fit.exponential.distribution.survival(p.x),
        })
        .collect()
}

/// One line of an evaluator table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluatorRow {
    pub x: f64,
    pub density: f64,
    pub cumulative: f64,
    pub survival: f64,
}

/// Tabulate `d` on `[from, to)` with the given positive step.
pub fn evaluator_rows(d: &impl Lifetime, from: f64, to: f64, step: f64) -> Vec<EvaluatorRow> {
    if !(step.is_finite() && step > 0.0 && from.is_finite() && to.is_finite()) {
        return Vec::new();
    }
    let mut rows = Vec::new();
    let mut k = 0u64;
    loop {
        // Multiply instead of accumulating to avoid drift over long ranges.
        let x = from + k as f64 * step;
        if x >= to {
            break;
        }
        rows.push(EvaluatorRow {
            x,
            density: d.density(x),
            cumulative: d.cumulative(x),
            survival: d.survival(x),
        });
        k += 1;
    }
    rows
}
