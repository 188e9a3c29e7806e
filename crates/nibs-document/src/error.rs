//! Error types for document loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Unsupported file type.
    #[error("unsupported file type: {path}")]
    UnsupportedFileType {
        /// Path to the unsupported file.
        path: PathBuf,
    },

    /// Invalid TOML document.
    #[error("failed to parse {path}: {source}")]
    ParseToml {
        /// Path to the document file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// Invalid JSON document.
    #[error("failed to parse {path}: {source}")]
    ParseJson {
        /// Path to the document file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Two sections, or two subsections of one section, share an id.
    #[error("duplicate id '{id}' in {scope}")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
        /// Where the duplicate was found.
        scope: String,
    },
}
