//! Error types for the nibs-reader crate.

use std::{io, path::PathBuf};

use nibs_config::ConfigError;
use thiserror::Error;

/// Errors that can occur while setting up or persisting a reader session.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// Configuration could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to read the session state file.
    #[error("failed to read session state {path}: {source}")]
    ReadState {
        /// Path to the state file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write the session state file.
    #[error("failed to write session state {path}: {source}")]
    WriteState {
        /// Path to the state file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The session state file is not valid JSON.
    #[error("failed to parse session state {path}: {source}")]
    ParseState {
        /// Path to the state file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The session state could not be serialized.
    #[error("failed to serialize session state: {0}")]
    SerializeState(#[source] serde_json::Error),
}
