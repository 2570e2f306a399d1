//! Event record ingest.
//!
//! Each record is `time,kind` where `kind` is `ttf` (failure) or `t+`
//! (censored). There is no header; fields are trimmed and blank lines are
//! skipped. The first malformed record aborts the ingest with its line number.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{Event, EventKind};
use crate::error::AppError;

/// A record-level error encountered during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: u64,
    pub message: String,
}

impl From<RowError> for AppError {
    fn from(err: RowError) -> Self {
        AppError::new(2, format!("line {}: {}", err.line, err.message))
    }
}

/// Load events from a file.
pub fn load_events(path: &Path) -> Result<Vec<Event>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open events file '{}': {e}", path.display())))?;
    Ok(read_events(file)?)
}

/// Parse events from any reader (stdin, file, in-memory buffer).
pub fn read_events(reader: impl Read) -> Result<Vec<Event>, RowError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut events = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| RowError {
            line: e.position().map(|p| p.line()).unwrap_or(idx as u64 + 1),
            message: format!("could not read record: {e}"),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(idx as u64 + 1);

        let event = parse_record(&record).map_err(|message| RowError { line, message })?;
        events.push(event);
    }

    Ok(events)
}

fn parse_record(record: &StringRecord) -> Result<Event, String> {
    if record.len() != 2 {
        return Err(format!(
            "could not parse event: expected 2 fields, got {}",
            record.len()
        ));
    }

    let time: f64 = record[0]
        .parse()
        .map_err(|e| format!("could not parse event time '{}': {e}", &record[0]))?;
    if !(time.is_finite() && time >= 0.0) {
        return Err(format!("event time must be finite and >= 0, got {time}"));
    }

    let kind: EventKind = record[1].parse().map_err(|e| format!("could not parse event: {e}"))?;

    Ok(Event { time, kind })
}
