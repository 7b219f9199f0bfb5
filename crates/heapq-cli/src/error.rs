//! Error types for the command-line runner.

use thiserror::Error;

/// Errors that can occur while loading or draining tasks.
#[derive(Error, Debug)]
pub enum CliError {
    /// Task spec was not of the form `name=priority`.
    #[error("invalid task '{0}': expected NAME=PRIORITY")]
    InvalidTask(String),

    /// Reading the task file or writing output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Task file or output was not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for command-line operations.
pub type Result<T> = std::result::Result<T, CliError>;
