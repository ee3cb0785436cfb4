//! Error types for the benchmarking utilities.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the helper utilities.
#[derive(Debug, Error)]
pub enum MatbenchError {
    // === Fit State Errors ===
    /// A transform-like operation ran before the object was fit.
    #[error("{transformer} has not been fit; call fit before transform")]
    NotFitted { transformer: String },

    // === Metric Errors ===
    /// Metric name is not in the direction table.
    #[error("unknown metric '{name}': cannot decide whether greater is better")]
    UnknownMetric { name: String },

    // === DataFrame Errors ===
    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Columns seen during fit are absent from the frame being transformed.
    #[error("frame is missing fitted columns: {}", .missing.join(", "))]
    ColumnMismatch { missing: Vec<String> },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    // === CSV Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Logging Errors ===
    /// Failed to open the configured log file.
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MatbenchError {
    /// Returns true for the error raised by a transform on an unfit object.
    pub fn is_not_fitted(&self) -> bool {
        matches!(self, Self::NotFitted { .. })
    }
}

impl From<polars::prelude::PolarsError> for MatbenchError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for utility operations.
pub type Result<T> = std::result::Result<T, MatbenchError>;
