//! Synthetic failure/censoring samples drawn from a known lifetime model.
//!
//! Useful for demos and for checking that the estimate -> fit pipeline
//! recovers known parameters. Sampling is deterministic for a given seed.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Exp};

use crate::dist::{Exponential, Weibull};
use crate::domain::Event;
use crate::error::FitError;

/// Lifetime model to draw failure times from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleModel {
    Exponential(Exponential),
    Weibull(Weibull),
}

/// Sampling options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleOptions {
    pub count: usize,
    pub seed: u64,
    /// Time-terminated test: units still running at this time are censored.
    pub censor_at: Option<f64>,
}

/// Draw `opts.count` events from `model`.
pub fn generate_events(model: SampleModel, opts: &SampleOptions) -> Result<Vec<Event>, FitError> {
    if opts.count == 0 {
        return Err(FitError::InvalidParameter("sample count must be > 0".to_string()));
    }
    if let Some(c) = opts.censor_at {
        if !(c.is_finite() && c > 0.0) {
            return Err(FitError::InvalidParameter(format!(
                "censoring time must be finite and > 0, got {c}"
            )));
        }
    }

    let mut rng = StdRng::seed_from_u64(opts.seed);
    let times: Vec<f64> = match model {
        SampleModel::Exponential(e) => {
            let dist = Exp::new(e.rate())
                .map_err(|err| FitError::InvalidParameter(format!("exponential sampler: {err}")))?;
            dist.sample_iter(&mut rng).take(opts.count).collect()
        }
        SampleModel::Weibull(w) => {
            let dist = rand_distr::Weibull::new(w.scale(), w.shape())
                .map_err(|err| FitError::InvalidParameter(format!("weibull sampler: {err}")))?;
            dist.sample_iter(&mut rng).take(opts.count).collect()
        }
    };

    let events = times
        .into_iter()
        .map(|t| match opts.censor_at {
            Some(c) if t > c => Event::censored(c),
            _ => Event::failure(t),
        })
        .collect();

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventKind, MethodSpec};

    fn weibull_model() -> SampleModel {
        SampleModel::Weibull(Weibull::new(2.0, 100.0).unwrap())
    }

    #[test]
    fn same_seed_same_sample() {
        let opts = SampleOptions {
            count: 25,
            seed: 7,
            censor_at: None,
        };
        let a = generate_events(weibull_model(), &opts).unwrap();
        let b = generate_events(weibull_model(), &opts).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 25);
        assert!(a.iter().all(|e| e.kind == EventKind::Failure && e.time >= 0.0));
    }

    #[test]
    fn censoring_caps_times() {
        let opts = SampleOptions {
            count: 200,
            seed: 1,
            censor_at: Some(80.0),
        };
        let events = generate_events(weibull_model(), &opts).unwrap();
        for e in &events {
            match e.kind {
                EventKind::Censored => assert_eq!(e.time, 80.0),
                EventKind::Failure => assert!(e.time <= 80.0),
            }
        }
        // R(80) = exp(-0.64) ~ 0.53, so both kinds appear.
        assert!(events.iter().any(|e| e.kind == EventKind::Censored));
        assert!(events.iter().any(|e| e.kind == EventKind::Failure));
    }

    #[test]
    fn rejects_bad_options() {
        let model = SampleModel::Exponential(Exponential::new(1.0).unwrap());
        let zero = SampleOptions {
            count: 0,
            seed: 0,
            censor_at: None,
        };
        assert!(generate_events(model, &zero).is_err());

        let bad_censor = SampleOptions {
            count: 5,
            seed: 0,
            censor_at: Some(-1.0),
        };
        assert!(generate_events(model, &bad_censor).is_err());
    }

    #[test]
    fn large_sample_fit_recovers_shape() {
        let opts = SampleOptions {
            count: 2000,
            seed: 42,
            censor_at: None,
        };
        let events = generate_events(weibull_model(), &opts).unwrap();
        let sel = crate::fit::fit_and_select(&events, MethodSpec::Mrm).unwrap();
        let w = sel.best().weibull.distribution;
        assert!((w.shape() - 2.0).abs() < 0.3, "shape {}", w.shape());
        assert!((w.scale() - 100.0).abs() < 10.0, "scale {}", w.scale());
    }
}
