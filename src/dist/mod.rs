//! Parametric lifetime distributions.
//!
//! Both distributions are immutable value types implementing [`Lifetime`].
//! Every evaluator is total over the real line: times before zero are treated
//! as "before the process starts" (no density, no failures, full survival).

pub mod exponential;
pub mod weibull;

pub use exponential::*;
pub use weibull::*;

/// Evaluators shared by all lifetime distributions.
pub trait Lifetime {
    /// Natural log of the probability density at `x` (`-inf` for `x < 0`).
    fn ln_density(&self, x: f64) -> f64;

    /// Probability density at `x`.
    fn density(&self, x: f64) -> f64 {
        self.ln_density(x).exp()
    }

    /// Cumulative distribution function `F(x)`.
    fn cumulative(&self, x: f64) -> f64;

    /// Natural log of the survival function (`0` for `x < 0`).
    fn ln_survival(&self, x: f64) -> f64;

    /// Survival function `R(x) = 1 - F(x)`.
    fn survival(&self, x: f64) -> f64 {
        self.ln_survival(x).exp()
    }

    /// Instantaneous failure rate `f(x) / R(x)` (`0` for `x < 0`).
    fn hazard(&self, x: f64) -> f64;
}

fn check_parameter(name: &str, value: f64) -> Result<f64, crate::error::FitError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(crate::error::FitError::InvalidParameter(format!(
            "{name} must be finite and > 0, got {value}"
        )))
    }
}
