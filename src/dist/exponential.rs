//! Exponential distribution (constant hazard).

use serde::{Deserialize, Serialize};

use super::{Lifetime, check_parameter};
use crate::error::FitError;

/// Exponential distribution with failure `rate` (λ > 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ExponentialParams")]
pub struct Exponential {
    rate: f64,
}

#[derive(Deserialize)]
struct ExponentialParams {
    rate: f64,
}

impl TryFrom<ExponentialParams> for Exponential {
    type Error = FitError;

    fn try_from(p: ExponentialParams) -> Result<Self, Self::Error> {
        Exponential::new(p.rate)
    }
}

impl Exponential {
    pub fn new(rate: f64) -> Result<Self, FitError> {
        Ok(Self {
            rate: check_parameter("rate", rate)?,
        })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Lifetime for Exponential {
    fn ln_density(&self, x: f64) -> f64 {
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        self.rate.ln() - self.rate * x
    }

    fn density(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        self.rate * (-self.rate * x).exp()
    }

    fn cumulative(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        // 1 - exp(-λx) without cancellation near zero.
        -(-self.rate * x).exp_m1()
    }

    fn ln_survival(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        -self.rate * x
    }

    fn hazard(&self, x: f64) -> f64 {
        if x < 0.0 { 0.0 } else { self.rate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_rate() {
        assert!(matches!(Exponential::new(0.0), Err(FitError::InvalidParameter(_))));
        assert!(matches!(Exponential::new(-1.0), Err(FitError::InvalidParameter(_))));
        assert!(matches!(Exponential::new(f64::NAN), Err(FitError::InvalidParameter(_))));
    }

    #[test]
    fn deserialize_checks_rate() {
        let e: Exponential = serde_json::from_str(r#"{"rate":0.25}"#).unwrap();
        assert_eq!(e.rate(), 0.25);
        assert_eq!(serde_json::to_string(&e).unwrap(), r#"{"rate":0.25}"#);

        assert!(serde_json::from_str::<Exponential>(r#"{"rate":0.0}"#).is_err());
        assert!(serde_json::from_str::<Exponential>(r#"{"rate":-3.0}"#).is_err());
    }

    #[test]
    fn negative_time_boundary_values() {
        let e = Exponential::new(0.5).unwrap();
        assert_eq!(e.density(-1.0), 0.0);
        assert_eq!(e.cumulative(-1.0), 0.0);
        assert_eq!(e.survival(-1.0), 1.0);
        assert_eq!(e.hazard(-1.0), 0.0);
    }

    #[test]
    fn evaluators_match_closed_form() {
        let e = Exponential::new(0.5).unwrap();
        for &x in &[0.0_f64, 0.1, 1.0, 4.0, 20.0] {
            let s = (-0.5 * x).exp();
            assert!((e.density(x) - 0.5 * s).abs() < 1e-12);
            assert!((e.survival(x) - s).abs() < 1e-12);
            assert!((e.cumulative(x) + e.survival(x) - 1.0).abs() < 1e-12);
        }
        assert_eq!(e.survival(0.0), 1.0);
        assert_eq!(e.density(0.0), 0.5);
    }

    #[test]
    fn cumulative_is_accurate_near_zero() {
        let e = Exponential::new(1.0).unwrap();
        let x = 1e-12;
        // Naive 1 - exp(-x) loses most significant digits here.
        assert!((e.cumulative(x) - x).abs() / x < 1e-9);
    }

    #[test]
    fn survival_strictly_decreasing() {
        let e = Exponential::new(0.3).unwrap();
        let mut prev = e.survival(0.0);
        for i in 1..50 {
            let s = e.survival(i as f64 * 0.5);
            assert!(s < prev);
            prev = s;
        }
    }
}
