//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during estimation and fitting
//! - exported to JSON

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::FitError;

/// What happened to a unit at the recorded time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// The unit failed (time-to-failure).
    #[serde(rename = "ttf")]
    Failure,
    /// The unit was removed from observation while still working (right-censored).
    #[serde(rename = "t+")]
    Censored,
}

impl EventKind {
    /// Record tag used by the `time,kind` text format.
    pub fn tag(self) -> &'static str {
        match self {
            EventKind::Failure => "ttf",
            EventKind::Censored => "t+",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EventKind {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ttf" => Ok(EventKind::Failure),
            "t+" => Ok(EventKind::Censored),
            other => Err(FitError::InvalidInput(format!(
                "invalid event type '{other}' (expected 'ttf' or 't+')"
            ))),
        }
    }
}

/// A single life-data observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub time: f64,
    pub kind: EventKind,
}

impl Event {
    pub fn failure(time: f64) -> Self {
        Self {
            time,
            kind: EventKind::Failure,
        }
    }

    pub fn censored(time: f64) -> Self {
        Self {
            time,
            kind: EventKind::Censored,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == EventKind::Failure
    }
}

/// A sample of a survival function: time `x` and probability `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

/// Non-parametric survival estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Direct Method: `1 - i/n`.
    Dm,
    /// Improved Direct Method: `1 - i/(n+1)`.
    Idm,
    /// Median Rank Method (Bernard's approximation): `1 - (i-0.3)/(n+0.4)`.
    Mrm,
    /// Product-Limit (Kaplan-Meier) estimator; the only one using censored events.
    Ple,
}

impl Method {
    pub const ALL: [Method; 4] = [Method::Dm, Method::Idm, Method::Mrm, Method::Ple];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Method::Dm => "DM",
            Method::Idm => "IDM",
            Method::Mrm => "MRM",
            Method::Ple => "PLE",
        }
    }

    /// Whether the estimator accounts for censored observations.
    pub fn uses_censoring(self) -> bool {
        matches!(self, Method::Ple)
    }
}

/// Which estimator(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MethodSpec {
    Dm,
    Idm,
    Mrm,
    Ple,
    All,
}

impl MethodSpec {
    /// Expand the selector into concrete estimators (in display order).
    pub fn methods(self) -> Vec<Method> {
        match self {
            MethodSpec::Dm => vec![Method::Dm],
            MethodSpec::Idm => vec![Method::Idm],
            MethodSpec::Mrm => vec![Method::Mrm],
            MethodSpec::Ple => vec![Method::Ple],
            MethodSpec::All => Method::ALL.to_vec(),
        }
    }
}

/// A fitted distribution together with its index of fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fit<D> {
    pub distribution: D,
    /// Pearson correlation of the linearized coordinates.
    pub r: f64,
    /// Number of points that entered the regression.
    pub n: usize,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub method_spec: MethodSpec,
    /// Read events from this file instead of stdin.
    pub input: Option<PathBuf>,
    /// Print the per-point survival table.
    pub verbose: bool,
    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_parses_record_tags() {
        assert_eq!("ttf".parse::<EventKind>().unwrap(), EventKind::Failure);
        assert_eq!("t+".parse::<EventKind>().unwrap(), EventKind::Censored);
        assert!(matches!(
            "TTF".parse::<EventKind>(),
            Err(FitError::InvalidInput(_))
        ));
    }

    #[test]
    fn event_kind_serializes_as_tag() {
        let json = serde_json::to_string(&Event::censored(3.5)).unwrap();
        assert_eq!(json, r#"{"time":3.5,"kind":"t+"}"#);
    }

    #[test]
    fn method_spec_all_expands_in_order() {
        assert_eq!(MethodSpec::All.methods(), Method::ALL.to_vec());
        assert_eq!(MethodSpec::Ple.methods(), vec![Method::Ple]);
    }

    #[test]
    fn only_product_limit_uses_censoring() {
        let censoring: Vec<Method> = Method::ALL.into_iter().filter(|m| m.uses_censoring()).collect();
        assert_eq!(censoring, vec![Method::Ple]);
    }
}
