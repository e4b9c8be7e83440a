//! CLI-level errors (wraps domain errors)

use thiserror::Error;

use crate::errors::CalcError;

/// CLI errors are the top-level error type.
/// Their `Display` text is exactly the line the harness reads from stdout.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] CalcError),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Every failure kind shares one code; only the stdout message
    /// distinguishes them.
    pub fn exit_code(&self) -> i32 {
        crate::exitcode::FAILURE
    }
}
