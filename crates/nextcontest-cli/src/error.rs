//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

use nextcontest_core::TracingError;
use nextcontest_sources::SourceError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Source-layer failure that was not isolated (client construction).
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// Serializing the schedule failed.
    #[error("failed to serialize schedule: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Reading a file failed.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tracing initialization failed.
    #[error("failed to initialize logging: {0}")]
    Tracing(#[from] TracingError),
}
