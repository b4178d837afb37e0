//! Error types for scorecard.

use thiserror::Error;

/// Result type for scorecard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for scorecard operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report file parsing or validation error.
    #[error("Report error: {0}")]
    Report(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Chart serialization or write error.
    #[error("Output error: {0}")]
    Output(String),
}

impl Error {
    /// Create a report error.
    pub fn report(msg: impl Into<String>) -> Self {
        Error::Report(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create an output error.
    pub fn output(msg: impl Into<String>) -> Self {
        Error::Output(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Report(format!("{}", err))
    }
}
