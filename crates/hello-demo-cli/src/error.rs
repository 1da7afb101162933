//! Error types for the hello-demo command line.

use thiserror::Error;

/// Exit code for malformed, unknown, or incomplete arguments.
pub const USAGE_EXIT_CODE: u8 = 2;

/// Exit code for failures after arguments were accepted.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Errors that can end a `hello-demo` invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown flag, flag without its value, or stray positional argument.
    #[error("Invalid arguments")]
    InvalidArguments(#[source] clap::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::InvalidArguments(_) => USAGE_EXIT_CODE,
            CliError::Output(_) => FAILURE_EXIT_CODE,
        }
    }
}

/// Result type alias using [`CliError`].
pub type Result<T> = std::result::Result<T, CliError>;
