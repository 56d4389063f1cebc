//! Error types for pipstrap operations.
//!
//! This module defines [`PipstrapError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PipstrapError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PipstrapError::Other`) for unexpected errors
//! - Only the binary entry point turns an error into a process exit code

use thiserror::Error;

use crate::installer::RequiredModules;

/// Core error type for pipstrap operations.
#[derive(Debug, Error)]
pub enum PipstrapError {
    /// Upgrading pip or installing the requested modules failed.
    ///
    /// `modules` is always the full list that was requested.
    #[error("Failed to install pip modules: {modules}. Error: {source}")]
    InstallationFailure {
        modules: RequiredModules,
        source: Box<PipstrapError>,
    },

    /// A package-manager invocation exited with a non-zero status.
    #[error("Command '{command}' returned non-zero exit status {}", exit_status(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// A package-manager invocation could not be started.
    #[error("Failed to run '{command}': {source}")]
    SpawnFailed {
        command: String,
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "(killed by signal)".to_string(),
    }
}

/// Result type alias for pipstrap operations.
pub type Result<T> = std::result::Result<T, PipstrapError>;
