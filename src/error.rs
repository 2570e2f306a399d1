//! Error types.
//!
//! - [`FitError`] is returned by the numerical core (estimators, fitters,
//!   distribution constructors).
//! - [`AppError`] carries a process exit code and is what the binary reports.

use thiserror::Error;

/// Errors raised by the estimation and fitting core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// Malformed input data (negative times, probabilities outside `[0, 1]`, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Not enough usable observations for the requested operation.
    #[error("insufficient data: expected at least {expected}, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// The regression could not produce a meaningful fit.
    #[error("degenerate fit: {0}")]
    Degenerate(String),

    /// A distribution parameter outside its domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        let exit_code = match err {
            FitError::InsufficientData { .. } => 3,
            _ => 4,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
