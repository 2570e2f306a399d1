//! Export a fit run to JSON.
//!
//! The export is the portable record of a run: which estimator produced the
//! empirical points, the points themselves, and both fitted distributions.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dist::{Exponential, Weibull};
use crate::domain::{Fit, Method, Point};
use crate::error::AppError;
use crate::fit::MethodFit;

/// One estimator's results inside a run file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodRecord {
    pub method: Method,
    pub points: Vec<Point>,
    pub weibull: Fit<Weibull>,
    pub exponential: Fit<Exponential>,
}

impl From<&MethodFit> for MethodRecord {
    fn from(fit: &MethodFit) -> Self {
        Self {
            method: fit.method,
            points: fit.points.clone(),
            weibull: fit.weibull,
            exponential: fit.exponential,
        }
    }
}

/// Saved run file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunFile {
    pub tool: String,
    pub events: usize,
    pub best: Method,
    pub methods: Vec<MethodRecord>,
}

/// Write a run JSON file.
pub fn write_run_json(path: &Path, run: &RunFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, run)
        .map_err(|e| AppError::new(2, format!("Failed to write export JSON: {e}")))?;

    Ok(())
}

/// Read a run JSON file.
pub fn read_run_json(path: &Path) -> Result<RunFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open export JSON '{}': {e}", path.display())))?;
    let run: RunFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid export JSON: {e}")))?;
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Event;

    #[test]
    fn write_then_read_run_file() {
        let events = vec![
            Event::failure(1.0),
            Event::failure(2.5),
            Event::censored(3.0),
            Event::failure(4.0),
        ];
        let fit = crate::fit::fit_method(Method::Ple, &events).unwrap();
        let run = RunFile {
            tool: "lf".to_string(),
            events: events.len(),
            best: fit.method,
            methods: vec![MethodRecord::from(&fit)],
        };

        let path = std::env::temp_dir().join(format!("life-fit-export-{}.json", std::process::id()));
        write_run_json(&path, &run).unwrap();
        let back = read_run_json(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(back.best, Method::Ple);
        assert_eq!(back.methods[0].points.len(), fit.points.len());
        for (a, b) in back.methods[0].points.iter().zip(&fit.points) {
            assert!((a.x - b.x).abs() < 1e-12 && (a.y - b.y).abs() < 1e-12);
        }
        let w = back.methods[0].weibull.distribution;
        assert!((w.shape() - fit.weibull.distribution.shape()).abs() < 1e-12);
        assert!((back.methods[0].exponential.r - fit.exponential.r).abs() < 1e-12);
    }
}
