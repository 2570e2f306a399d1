//! Least-squares moments on linearized coordinates.
//!
//! Both lifetime fits reduce to a straight line in a transformed space. This
//! module accumulates, once, everything the fitters need:
//!
//! ```text
//! raw sums      Σx·y, Σx²                 (slope through the origin)
//! centered sums Σ(x-x̄)(y-ȳ), Σ(x-x̄)², Σ(y-ȳ)²   (affine slope, Pearson r)
//! ```
//!
//! The index of fit is always the ordinary (mean-centered) Pearson
//! correlation, even when the slope is forced through the origin.

use nalgebra::DVector;

/// Sums and means of a set of `(x, y)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearMoments {
    pub n: usize,
    pub mean_x: f64,
    pub mean_y: f64,
    /// Σ x·y
    pub sum_xy: f64,
    /// Σ x²
    pub sum_xx: f64,
    /// Σ (x - x̄)(y - ȳ)
    pub dev_xy: f64,
    /// Σ (x - x̄)²
    pub dev_xx: f64,
    /// Σ (y - ȳ)²
    pub dev_yy: f64,
}

impl LinearMoments {
    /// Accumulate moments.
    ///
    /// # Panics
    /// Panics if `x` and `y` differ in length. Callers build both from the same
    /// point list.
    pub fn from_columns(x: &DVector<f64>, y: &DVector<f64>) -> Self {
        assert_eq!(x.len(), y.len(), "coordinate columns must have equal length");
        let n = x.len();
        let mean_x = x.mean();
        let mean_y = y.mean();

        let dx = x.add_scalar(-mean_x);
        let dy = y.add_scalar(-mean_y);

        Self {
            n,
            mean_x,
            mean_y,
            sum_xy: x.dot(y),
            sum_xx: x.dot(x),
            dev_xy: dx.dot(&dy),
            dev_xx: dx.dot(&dx),
            dev_yy: dy.dot(&dy),
        }
    }

    /// Slope of `y = b·x` (no intercept).
    pub fn slope_through_origin(&self) -> f64 {
        self.sum_xy / self.sum_xx
    }

    /// Slope of the ordinary least-squares line `y = a + b·x`.
    pub fn slope(&self) -> f64 {
        self.dev_xy / self.dev_xx
    }

    /// Intercept of the ordinary least-squares line.
    pub fn intercept(&self) -> f64 {
        self.mean_y - self.slope() * self.mean_x
    }

    /// Pearson correlation using population standard deviations.
    pub fn pearson_r(&self) -> f64 {
        let n = self.n as f64;
        let sd_x = (self.dev_xx / n).sqrt();
        let sd_y = (self.dev_yy / n).sqrt();
        (self.dev_xy / n) / (sd_x * sd_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_line_has_unit_correlation() {
        // y = 2 + 3x
        let x = DVector::from_row_slice(&[0.0, 1.0, 2.0, 3.0]);
        let y = x.map(|v| 2.0 + 3.0 * v);
        let m = LinearMoments::from_columns(&x, &y);

        assert!((m.slope() - 3.0).abs() < 1e-12);
        assert!((m.intercept() - 2.0).abs() < 1e-12);
        assert!((m.pearson_r() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn origin_slope_uses_raw_sums() {
        // y = 2 + 3x again: the forced-origin slope differs from the affine one.
        let x = DVector::from_row_slice(&[1.0, 2.0, 3.0]);
        let y = DVector::from_row_slice(&[5.0, 8.0, 11.0]);
        let m = LinearMoments::from_columns(&x, &y);

        let expected = (5.0 + 16.0 + 33.0) / (1.0 + 4.0 + 9.0);
        assert!((m.slope_through_origin() - expected).abs() < 1e-12);
        assert!((m.slope() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn negative_correlation() {
        let x = DVector::from_row_slice(&[1.0, 2.0, 3.0, 4.0]);
        let y = DVector::from_row_slice(&[4.0, 3.1, 1.9, 1.0]);
        let r = LinearMoments::from_columns(&x, &y).pearson_r();
        assert!(r < -0.99 && r >= -1.0);
    }
}
