//! Document file parsing.
//!
//! Documents are stored as TOML or JSON files; the format is chosen by file extension.
//!
//! ```toml
//! title = "Atmospheric Pressure and Barometers"
//! author = "Educational Sciences"
//! type = "science"
//!
//! [[sections]]
//! id = "introduction"
//! title = "Introduction to Atmospheric Pressure"
//!
//! [[sections.subsections]]
//! id = "what-is-pressure"
//! title = "What is Atmospheric Pressure?"
//! content = "<p>Atmospheric pressure is the force exerted by the weight of air.</p>"
//! ```

use std::{fs, path::Path};

use crate::{Document, DocumentError};

/// Serialization format of a document file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// TOML with `[[sections]]` and `[[sections.subsections]]` tables.
    Toml,
    /// JSON object with a `sections` array.
    Json,
}

impl DocumentFormat {
    /// Detects the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parses and validates a document from a string.
///
/// The path is used only for error messages.
pub fn parse_document_str(
    contents: &str,
    format: DocumentFormat,
    path: &Path,
) -> Result<Document, DocumentError> {
    let document: Document = match format {
        DocumentFormat::Toml => {
            toml::from_str(contents).map_err(|source| DocumentError::ParseToml {
                path: path.to_path_buf(),
                source,
            })?
        }
        DocumentFormat::Json => {
            serde_json::from_str(contents).map_err(|source| DocumentError::ParseJson {
                path: path.to_path_buf(),
                source,
            })?
        }
    };

    document.validate()?;
    Ok(document)
}

/// Reads, parses and validates a document file.
///
/// Supported extensions:
/// - `.toml` - parsed as TOML
/// - `.json` - parsed as JSON
pub fn parse_document_file(path: &Path) -> Result<Document, DocumentError> {
    let format =
        DocumentFormat::from_path(path).ok_or_else(|| DocumentError::UnsupportedFileType {
            path: path.to_path_buf(),
        })?;

    let contents = fs::read_to_string(path).map_err(|source| DocumentError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document_str(&contents, format, path)
}
