//! Error types for the ciftify-env CLI.
//!
//! Uses thiserror for derive macros. Nothing below `main` terminates the
//! process; every failure travels up as a `CiftifyError` and `main` maps it
//! to an exit code.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ciftify-env operations.
#[derive(Error, Debug)]
pub enum CiftifyError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// Config file could not be read, parsed, or failed validation.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A required external dependency could not be located at all.
    #[error("Cannot find {what}. {hint}")]
    DependencyNotFound { what: String, hint: String },

    /// A resolved path does not exist on disk.
    #[error("{what} does not exist: {}", .path.display())]
    MissingPath { what: String, path: PathBuf },

    /// A resolved path exists but is not a directory.
    #[error("{what} is not a directory: {}", .path.display())]
    NotADirectory { what: String, path: PathBuf },

    /// A subprocess could not be spawned or exited with a failure status.
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// Filesystem operation failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CiftifyError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CiftifyError::UserError(_) => exit_codes::USER_ERROR,
            CiftifyError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            CiftifyError::DependencyNotFound { .. } => exit_codes::DEPENDENCY_FAILURE,
            CiftifyError::MissingPath { .. } => exit_codes::DEPENDENCY_FAILURE,
            CiftifyError::NotADirectory { .. } => exit_codes::DEPENDENCY_FAILURE,
            CiftifyError::CommandFailed(_) => exit_codes::COMMAND_FAILURE,
            CiftifyError::Io { .. } => exit_codes::USER_ERROR,
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        CiftifyError::Io {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn missing(what: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        CiftifyError::MissingPath {
            what: what.into(),
            path: path.into(),
        }
    }
}

/// Result type alias for ciftify-env operations.
pub type Result<T> = std::result::Result<T, CiftifyError>;
