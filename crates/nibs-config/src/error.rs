//! Errors raised while loading `.nibs.toml` files.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::{de, ser};

/// Why a configuration could not be loaded.
///
/// Problems that still leave a usable configuration, such as a library whose patterns
/// match no documents, are [`ConfigWarning`](crate::ConfigWarning)s instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("cannot read {path}: {source}")]
    ReadFile {
        /// The config file.
        path: PathBuf,
        /// I/O failure.
        source: io::Error,
    },

    /// A config file is not valid TOML or has a setting of the wrong type.
    #[error("invalid config {path}: {source}")]
    ParseToml {
        /// The config file.
        path: PathBuf,
        /// Parser diagnostic, including line and column.
        source: de::Error,
    },

    /// Effective settings could not be written back out for `nibs status`.
    #[error("cannot render settings as TOML: {0}")]
    SerializeToml(#[source] ser::Error),

    /// A library `path` names a file rather than a folder.
    #[error("library path {path} is a file, not a folder")]
    LibraryPathNotDirectory {
        /// Canonical path of the file.
        path: PathBuf,
    },

    /// A library's include or exclude glob does not compile.
    #[error("library '{library}' has an invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Library the pattern belongs to.
        library: String,
        /// The offending pattern.
        pattern: String,
        /// Glob diagnostic.
        source: globset::Error,
    },

    /// `~` was used but the home directory is unknown.
    #[error("cannot expand '~': home directory unknown")]
    NoHomeDirectory,

    /// A library `path` does not exist or cannot be canonicalized.
    #[error("library path {path} cannot be resolved: {source}")]
    PathResolution {
        /// The path as joined onto the config directory.
        path: PathBuf,
        /// I/O failure.
        source: io::Error,
    },
}
