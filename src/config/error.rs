//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::project::ProjectError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Timeout is not a positive number of milliseconds.
    #[error("invalid timeout '{value}': must be a positive number of milliseconds")]
    InvalidTimeout { value: String },

    /// Ranking strategy name is not recognised.
    #[error("invalid ranking strategy: {reason}")]
    InvalidStrategy { reason: String },

    /// Model name is empty.
    #[error("model name must not be empty")]
    EmptyModel,

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// The catalog file could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] ProjectError),
}
