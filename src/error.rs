//! Error types for embedgen
//!
//! Uses `thiserror` for library errors. Every variant is fatal for the
//! artifact being generated; there is no partial-success mode.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::IdentifierError;

/// Result type alias for embedgen operations
pub type EmbedResult<T> = Result<T, EmbedError>;

/// Main error type for embedgen operations
#[derive(Error, Debug)]
pub enum EmbedError {
    /// Configured source directory is missing or not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// A resource exists but could not be listed or read
    #[error("failed to read resource {path}: {source}")]
    ResourceReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generated artifact could not be written
    #[error("failed to write output {path}: {source}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A group or constant name is not a valid C identifier
    #[error("invalid identifier '{name}': {reason}")]
    InvalidIdentifier {
        name: String,
        #[source]
        reason: IdentifierError,
    },

    /// Two files in one group map to the same generated identifier
    #[error(
        "identifier '{identifier}' in group {group} is produced by both '{first}' and '{second}'"
    )]
    IdentifierCollision {
        group: String,
        identifier: String,
        first: String,
        second: String,
    },

    /// Profile file could not be parsed
    #[error("invalid profile {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// An artifact was requested that the profile does not define
    #[error("unknown artifact '{name}'")]
    UnknownArtifact { name: String },
}
