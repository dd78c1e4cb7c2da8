//! Error types for haul-report.

use thiserror::Error;

/// Errors that can occur while writing event output.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, ReportError>`.
pub type ReportResult<T> = Result<T, ReportError>;
