//! Two-parameter Weibull distribution.
//!
//! ```text
//! f(x) = (β/θ) (x/θ)^(β-1) exp(-(x/θ)^β)
//! R(x) = exp(-(x/θ)^β)
//! ```
//!
//! At `x = 0` the density depends on the shape: `1/θ` when `β = 1`, `+inf`
//! when `β < 1`, and `0` when `β > 1`. These branches are evaluated explicitly
//! instead of going through `0^(β-1)`.

use serde::{Deserialize, Serialize};

use super::{Lifetime, check_parameter};
use crate::error::FitError;

/// Weibull distribution with `shape` (β > 0) and `scale` (θ > 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WeibullParams")]
pub struct Weibull {
    shape: f64,
    scale: f64,
}

/// Unchecked wire form; deserialization goes through [`Weibull::new`].
#[derive(Deserialize)]
struct WeibullParams {
    shape: f64,
    scale: f64,
}

impl TryFrom<WeibullParams> for Weibull {
    type Error = FitError;

    fn try_from(p: WeibullParams) -> Result<Self, Self::Error> {
        Weibull::new(p.shape, p.scale)
    }
}

impl Weibull {
    pub fn new(shape: f64, scale: f64) -> Result<Self, FitError> {
        Ok(Self {
            shape: check_parameter("shape", shape)?,
            scale: check_parameter("scale", scale)?,
        })
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// `(x/θ)^β`, the cumulative hazard.
    fn cumulative_hazard(&self, x: f64) -> f64 {
        (x / self.scale).powf(self.shape)
    }
}

impl Lifetime for Weibull {
    fn ln_density(&self, x: f64) -> f64 {
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        if x == 0.0 {
            return if self.shape == 1.0 {
                -self.scale.ln()
            } else if self.shape < 1.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
        }
        let ln_ratio = x.ln() - self.scale.ln();
        self.shape.ln() - self.scale.ln() + (self.shape - 1.0) * ln_ratio
            - self.cumulative_hazard(x)
    }

    fn density(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            return if self.shape == 1.0 {
                1.0 / self.scale
            } else if self.shape < 1.0 {
                f64::INFINITY
            } else {
                0.0
            };
        }
        self.ln_density(x).exp()
    }

    fn cumulative(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        -(-self.cumulative_hazard(x)).exp_m1()
    }

    fn ln_survival(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        -self.cumulative_hazard(x)
    }

    fn hazard(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            return self.density(0.0);
        }
        self.shape / self.scale * (x / self.scale).powf(self.shape - 1.0)
    }
}
