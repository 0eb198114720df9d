//! Error types for launcher operations.
//!
//! This module defines [`LauncherError`], the primary error type used
//! throughout the launcher, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant is fatal: nothing is retried and nothing is logged and
//!   continued. `main` prints the message once and exits non-zero.
//! - Use `anyhow::Error` (via `LauncherError::Other`) for unexpected errors
//! - Messages that ask the operator to install the runtime end with a URL

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The operator withheld consent to provision a private runtime.
    #[error(
        "You must install {runtime} to run MyST.\n\n\
         Installing {runtime} into {install_root} was declined. \
         Set {variable}=yes to allow it, or install {runtime} \
         yourself using your preferred package manager\n\
         or following instructions here: {help_url}"
    )]
    PermissionDenied {
        runtime: String,
        install_root: PathBuf,
        variable: String,
        help_url: String,
    },

    /// The installer subprocess failed; its cache directory was removed.
    #[error("Provisioning failed: {detail}")]
    ProvisionFailure { detail: String },

    /// The runtime's self-reported version did not match the expected shape.
    #[error("MyST could not determine the version of {runtime}: {output}")]
    VersionUnparseable { runtime: String, output: String },

    /// The runtime's major version is outside the allow-set.
    #[error(
        "MyST requires {runtime} {allowed}; you are running {runtime} {major}.\n\n\
         Please update to the latest LTS release, using your preferred package manager\n\
         or following instructions here: {help_url}"
    )]
    VersionUnsupported {
        runtime: String,
        major: u64,
        allowed: String,
        help_url: String,
    },

    /// Asking the runtime for its version failed outright.
    #[error("Could not query the version of {runtime} at {path}: {message}")]
    VersionQueryFailed {
        runtime: String,
        path: PathBuf,
        message: String,
    },

    /// A directory could not be joined into the search path.
    #[error("Invalid search path: {message}")]
    InvalidSearchPath { message: String },

    /// The platform reports no per-user data directory.
    #[error("Could not determine a per-user data directory for provisioned runtimes")]
    NoDataDirectory,

    /// Control could not be transferred to the runtime.
    #[error("Failed to start {runtime}: {source}")]
    HandoffFailed {
        runtime: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Launcher configuration file not found.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the launcher configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration parsed but holds unusable values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
