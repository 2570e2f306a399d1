//! Distribution fitting on empirical survival points.
//!
//! Responsibilities:
//!
//! - validate and linearize estimator output
//! - fit Exponential / Weibull by least squares on the linearized points
//! - run and compare estimators for a single event batch

pub mod fitter;
pub mod selection;

pub use fitter::*;
pub use selection::*;
