//! Unified error types for the job runner workspace.
//!
//! Every failure surfaces immediately to the caller; there is no retry or
//! partial-success state anywhere in the runner.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Registry credentials failed base64 decoding or JSON parsing.
    #[error("invalid registry credentials: {message}")]
    InvalidCredentials {
        /// Description of the decode or parse failure.
        message: String,
    },

    /// A CA certificate failed base64 decoding.
    #[error("invalid CA certificate: {message}")]
    InvalidCertificate {
        /// Description of the decode failure.
        message: String,
    },

    /// No supported container runtime binary was found on the search path.
    #[error("no supported container runtime found (probed: {probed})")]
    RuntimeNotFound {
        /// Comma-separated list of binaries that were probed.
        probed: String,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, RunnerError>;
