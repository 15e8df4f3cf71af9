//! Error types for observation document handling

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::Issue;

/// Errors raised while reading, writing or validating observation documents.
#[derive(Debug, Error)]
pub enum ObsError {
    /// The document text could not be parsed against the observation schema.
    #[error("failed to parse {format} observation document: {detail}")]
    Parse { format: &'static str, detail: String },

    /// YAML serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required file was not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The file extension does not map to a known document format.
    #[error("unsupported file format: {path} (expected .yml, .yaml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// A summary key does not follow `VECTOR[:QUALIFIER]`.
    #[error("invalid summary key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    /// Validation found one or more errors.
    #[error("document failed validation with {} error(s)", .errors.len())]
    Invalid { errors: Vec<Issue> },

    /// JSON has no representation for NaN or infinity.
    #[error("cannot write {format}: {location}.{field} is {value}")]
    NonFinite {
        format: &'static str,
        location: String,
        field: &'static str,
        value: f64,
    },

    /// A configuration file could not be read.
    #[error("invalid configuration at {path}: {detail}")]
    Config { path: PathBuf, detail: String },
}

/// Result alias for observation operations.
pub type ObsResult<T> = Result<T, ObsError>;
