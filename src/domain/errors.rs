//! Domain errors for the issue export pipeline.

use thiserror::Error;

/// Errors that can abort an export run.
///
/// None of these are retried: the first one raised terminates the pipeline
/// and whatever has already been flushed to disk stays as-is.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("GitHub returned {status} for {url}: {body}")]
    HttpStatus { status: u16, url: String, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<csv::Error> for DomainError {
    fn from(err: csv::Error) -> Self {
        // Surface the underlying I/O error as such so callers can tell a
        // full disk apart from a malformed row.
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io) => DomainError::Io(io),
                other => DomainError::Csv(format!("{other:?}")),
            }
        } else {
            DomainError::Csv(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::MalformedResponse(err.to_string())
    }
}
