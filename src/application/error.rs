//! Application-level errors

use thiserror::Error;

/// Errors raised while assembling demo output or loading settings.
///
/// The tree itself never fails; everything here comes from user input.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
