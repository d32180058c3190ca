//! Error types for ladybug configuration and data types.

use std::path::PathBuf;
use thiserror::Error;

/// Folder configuration loading and resolution errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No config file found at '{path}'")]
    NotFound { path: PathBuf },

    #[error("Failed to read config file '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create default data folder '{path}': {source}")]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Neither USERPROFILE nor HOME is set; cannot locate the default data folder")]
    NoHomeDir,

    #[error("Folders have not been initialized; call config::init first")]
    NotInitialized,

    #[error("Folders have already been initialized")]
    AlreadyInitialized,
}

/// Generic data type construction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataTypeError {
    #[error("{field} must be a non-empty string. Got {value:?}.")]
    Empty { field: &'static str, value: String },

    #[error("{field} must be a number. Got {value}.")]
    NotANumber { field: &'static str, value: f64 },

    #[error("cumulative cannot be true when point_in_time is also true")]
    CumulativePointInTime,
}
