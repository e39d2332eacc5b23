//! CLI-level errors (argument problems)

use thiserror::Error;

use crate::exitcode::ExitStatus;

/// Argument errors detected before any query is sent.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("missing argument: expected list-lines, list-stops <LINE_ID> or --help")]
    MissingCommand,

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the exit status for this error.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            CliError::MissingCommand => ExitStatus::NoArguments,
            CliError::InvalidArgs(_) | CliError::Usage(_) => ExitStatus::BadArguments,
        }
    }
}
