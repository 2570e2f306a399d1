//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - life-data observations (`Event`, `EventKind`)
//! - empirical/fitted samples of the survival function (`Point`)
//! - estimator selection enums (`Method`, `MethodSpec`)
//! - fit outputs (`Fit`) and the run configuration

pub mod types;

pub use types::*;
