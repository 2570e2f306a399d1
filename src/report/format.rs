//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::fit::{FitSelection, MethodFit};
use crate::report::{EvaluatorRow, SurvivalRow};

/// Fitted parameters and index of fit for both distributions.
pub fn format_fit_summary(fit: &MethodFit) -> String {
    let w = &fit.weibull;
    let e = &fit.exponential;
    let mut out = String::new();
    out.push_str(&format!(
        "Weibull:\tbeta/theta/r = {:.6}/{:.6}/{:.6}\n",
        w.distribution.shape(),
        w.distribution.scale(),
        w.r
    ));
    out.push_str(&format!(
        "Exponential:\trate/r = {:.6}/{:.6}\n",
        e.distribution.rate(),
        e.r
    ));
    out
}

/// Empirical survival vs both fitted curves.
pub fn format_survival_table(rows: &[SurvivalRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4} {:>10} {:>8} {:>8} {:>8}\n",
        "i", "t", "R(t)", "Weibull", "Exp"
    ));
    out.push_str(&format!(
        "{:->4} {:->10} {:->8} {:->8} {:->8}\n",
        "", "", "", "", ""
    ));
    for (i, r) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>4} {:>10.1} {:>8.3} {:>8.3} {:>8.3}\n",
            i, r.t, r.empirical, r.weibull, r.exponential
        ));
    }
    out
}

/// Side-by-side comparison of estimators; the best one is starred.
pub fn format_method_comparison(selection: &FitSelection) -> String {
    let mut out = String::new();
    out.push_str("Estimator comparison:\n");
    out.push_str(&format!(
        "  {:<5} {:>4} {:>10} {:>12} {:>9} {:>10} {:>9}\n",
        "", "n", "beta", "theta", "r(weib)", "rate", "r(exp)"
    ));
    for (i, f) in selection.fits.iter().enumerate() {
        let chosen = if i == selection.best { "*" } else { " " };
        out.push_str(&format!(
            "{chosen} {:<5} {:>4} {:>10.4} {:>12.4} {:>9.5} {:>10.6} {:>9.5}\n",
            f.method.display_name(),
            f.weibull.n,
            f.weibull.distribution.shape(),
            f.weibull.distribution.scale(),
            f.weibull.r,
            f.exponential.distribution.rate(),
            f.exponential.r,
        ));
    }
    for (method, reason) in &selection.skipped {
        out.push_str(&format!("  (skipped {}) {reason}\n", method.display_name()));
    }
    out
}

/// `x, f(x), F(x), R(x)` table for a distribution.
pub fn format_evaluator_table(rows: &[EvaluatorRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>10} {:>10} {:>10} {:>10}\n",
        "x", "f(x)", "F(x)", "R(x)"
    ));
    out.push_str(&format!("{:->10} {:->10} {:->10} {:->10}\n", "", "", "", ""));
    for r in rows {
        out.push_str(&format!(
            "{:>10.3} {:>10.3} {:>10.3} {:>10.3}\n",
            r.x, r.density, r.cumulative, r.survival
        ));
    }
    out
}
