//! Application-level errors

use thiserror::Error;

use crate::infrastructure::InfraError;

/// Application errors wrap infrastructure errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
