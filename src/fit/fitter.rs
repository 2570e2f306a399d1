//! Linearized least-squares fits for a single distribution.
//!
//! Given survival samples `(x_i, R_i)` we transform the coordinates so the
//! target survival function becomes a straight line:
//!
//! ```text
//! Exponential  R = exp(-λx)         ->  ln(1/R)     = λ·x             (through origin)
//! Weibull      R = exp(-(x/θ)^β)    ->  ln ln(1/R)  = β·ln x - β·ln θ
//! ```
//!
//! Preprocessing (shared):
//! - negative or non-finite times are rejected
//! - probabilities must lie in `[0, 1]`
//! - `x = 0` samples are dropped, as are samples whose transform is not finite
//!   (`R = 0`, and `R = 1` for Weibull)

use nalgebra::DVector;
use tracing::debug;

use crate::dist::{Exponential, Weibull};
use crate::domain::{Fit, Point};
use crate::error::FitError;
use crate::math::LinearMoments;

/// Minimum number of usable points for a regression with a correlation index.
const MIN_POINTS: usize = 2;

/// Fit an Exponential distribution to sampled survival points.
pub fn fit_exponential(points: &[Point]) -> Result<Fit<Exponential>, FitError> {
    let m = linearize(points, |p| (p.x, -p.y.ln()))?;

    let rate = m.slope_through_origin();
    let distribution = Exponential::new(rate)
        .map_err(|_| FitError::Degenerate(format!("fitted exponential rate {rate} is not positive")))?;
    let r = m.pearson_r();
    debug!(rate, r, n = m.n, "exponential fit");

    Ok(Fit {
        distribution,
        r,
        n: m.n,
    })
}

/// Fit a Weibull distribution to sampled survival points.
pub fn fit_weibull(points: &[Point]) -> Result<Fit<Weibull>, FitError> {
    let m = linearize(points, |p| (p.x.ln(), (-p.y.ln()).ln()))?;

    let shape = m.slope();
    let scale = (m.mean_x - m.mean_y / shape).exp();
    let distribution = Weibull::new(shape, scale).map_err(|_| {
        FitError::Degenerate(format!(
            "fitted weibull parameters are not positive (shape={shape}, scale={scale})"
        ))
    })?;
    let r = m.pearson_r();
    debug!(shape, scale, r, n = m.n, "weibull fit");

    Ok(Fit {
        distribution,
        r,
        n: m.n,
    })
}

/// Validate, sort, transform and accumulate regression moments.
fn linearize(
    points: &[Point],
    transform: impl Fn(&Point) -> (f64, f64),
) -> Result<LinearMoments, FitError> {
    if let Some(p) = points.iter().find(|p| !(p.x.is_finite() && p.x >= 0.0)) {
        return Err(FitError::InvalidInput(format!(
            "cannot fit on negative or non-finite time {}",
            p.x
        )));
    }
    if let Some(p) = points.iter().find(|p| !(0.0..=1.0).contains(&p.y)) {
        return Err(FitError::InvalidInput(format!(
            "survival probability {} at time {} is outside [0, 1]",
            p.y, p.x
        )));
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut xs = Vec::with_capacity(sorted.len());
    let mut ys = Vec::with_capacity(sorted.len());
    let mut dropped = 0usize;
    for p in sorted.iter().filter(|p| p.x > 0.0) {
        let (x, y) = transform(p);
        if x.is_finite() && y.is_finite() {
            xs.push(x);
            ys.push(y);
        } else {
            dropped += 1;
        }
    }
    if dropped > 0 {
        debug!(dropped, "skipping points with no finite linearization");
    }

    if xs.len() < MIN_POINTS {
        return Err(FitError::InsufficientData {
            expected: MIN_POINTS,
            actual: xs.len(),
        });
    }

    let m = LinearMoments::from_columns(&DVector::from_vec(xs), &DVector::from_vec(ys));
    if m.dev_xx <= 0.0 || m.dev_yy <= 0.0 {
        return Err(FitError::Degenerate(
            "linearized points have no spread".to_string(),
        ));
    }
    Ok(m)
}
