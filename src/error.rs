//! Errors raised by the fallible outer layer: configuration, plans and document files.
//!
//! The merge engine itself never fails; these only surface when loading inputs or writing
//! results.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures raised while building a section plan.
pub enum PlanError {
    /// Two section definitions share a key.
    #[error("duplicate section key '{0}'")]
    DuplicateKey(String),

    /// A section definition has a blank key.
    #[error("section with heading '{0}' has an empty key")]
    EmptyKey(String),

    /// Two headings are indistinguishable once normalised.
    #[error("headings '{0}' and '{1}' match the same document heading")]
    DuplicateHeading(String, String),

    /// A heading has no text left after normalisation, so it can never be recognised.
    #[error("section '{0}' has no usable heading text")]
    EmptyHeading(String),
}

#[derive(Debug, Error)]
/// Failures raised by the configuration, file and CLI layers.
pub enum Error {
    /// The config file could not be parsed.
    #[error("invalid config {}: {message}", .path.display())]
    Config {
        /// Config file that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// The section plan is inconsistent.
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// A key that the section plan does not define.
    #[error("unknown section '{0}'")]
    UnknownSection(String),

    /// Refused to replace an existing document.
    #[error("document already exists: {} (use --force to overwrite)", .0.display())]
    DocumentExists(PathBuf),

    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Edit plan (de)serialisation failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias for the fallible outer layer.
pub type Result<T> = std::result::Result<T, Error>;
