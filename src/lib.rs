//! `life-fit` library crate.
//!
//! The binary (`lf`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the estimators and fitters are reusable on their own
//!
//! Data flow: events -> [`estimate`] -> empirical points -> [`fit`] -> distribution + index of fit.

pub mod app;
pub mod cli;
pub mod data;
pub mod dist;
pub mod domain;
pub mod error;
pub mod estimate;
pub mod fit;
pub mod io;
pub mod math;
pub mod report;
