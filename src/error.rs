//! Crate-level error types

use thiserror::Error;

/// Errors surfaced by metric computation and dataset profiling
#[derive(Debug, Error)]
pub enum Error {
    /// Input sequences are unusable: mismatched lengths, empty where at
    /// least one sample is required, or values outside the expected domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A metric's denominator is zero, so the value does not exist.
    /// Callers get this error instead of NaN or a division panic.
    #[error("{metric} is undefined: {reason}")]
    UndefinedMetric {
        /// Name of the metric that could not be computed
        metric: &'static str,
        /// Why the denominator vanished
        reason: String,
    },

    /// Failure writing a report or figure to the caller's sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for [`Error::UndefinedMetric`]
    pub fn undefined(metric: &'static str, reason: impl Into<String>) -> Self {
        Error::UndefinedMetric { metric, reason: reason.into() }
    }

    /// Shorthand for the length-mismatch case of [`Error::InvalidInput`]
    pub fn length_mismatch(predictions: usize, truths: usize) -> Self {
        Error::InvalidInput(format!(
            "predictions and truths must have the same length ({predictions} vs {truths})"
        ))
    }

    /// Shorthand for the empty-input case of [`Error::InvalidInput`]
    pub fn empty_input(what: &str) -> Self {
        Error::InvalidInput(format!("{what} requires at least one sample"))
    }
}

/// Result type for evaluar operations
pub type Result<T> = std::result::Result<T, Error>;
