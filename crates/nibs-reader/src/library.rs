//! The content library: documents available for loading, by id.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use nibs_config::Config;
use nibs_document::{Document, DocumentSummary, Section, content_id, parse_document_file};

use crate::{ReaderError, discovery::discover_files};

/// Author recorded for documents built from a structure at runtime.
const USER_AUTHOR: &str = "User Created";
/// Kind recorded for documents built from a structure at runtime.
const USER_KIND: &str = "custom";

/// A library file that could not be registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// Path to the file that triggered the warning.
    pub path: PathBuf,
    /// Human-readable reason.
    pub reason: String,
}

/// Documents available to a session, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ContentLibrary {
    /// Registered documents with their ids.
    entries: Vec<(String, Document)>,
}

impl ContentLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovers and parses every document file in the configured libraries.
    ///
    /// Each document is registered under its explicit `id`, or its file stem. Files that fail
    /// to parse and ids already taken are reported as warnings; the first registration wins.
    pub fn discover(config: &Config) -> Result<(Self, Vec<LoadWarning>), ReaderError> {
        let patterns = config.compile_patterns()?;
        let mut library = Self::new();
        let mut warnings = Vec::new();

        for file in discover_files(&config.libraries, &patterns) {
            let document = match parse_document_file(&file.abs_path) {
                Ok(document) => document,
                Err(e) => {
                    warn!("skipping {}: {e}", file.abs_path.display());
                    warnings.push(LoadWarning {
                        path: file.abs_path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let Some(id) = document.id.clone().or_else(|| file_stem(&file.abs_path)) else {
                continue;
            };

            if library.contains(&id) {
                warn!(
                    "skipping {}: id '{id}' is already registered",
                    file.abs_path.display()
                );
                warnings.push(LoadWarning {
                    path: file.abs_path,
                    reason: format!("duplicate document id '{id}'"),
                });
                continue;
            }

            debug!("registered '{id}' from {}", file.abs_path.display());
            library.register(id, document);
        }

        Ok((library, warnings))
    }

    /// Adds a document, replacing any document already registered under `id`.
    pub fn register(&mut self, id: impl Into<String>, document: Document) {
        let id = id.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = document,
            None => self.entries.push((id, document)),
        }
    }

    /// Registers a document built from a title and sections.
    ///
    /// The id is derived from the title with [`content_id`]. Returns the id.
    pub fn create_from_structure(&mut self, title: &str, sections: Vec<Section>) -> String {
        let id = content_id(title);
        let document = Document {
            id: None,
            title: title.to_string(),
            author: Some(USER_AUTHOR.to_string()),
            year: None,
            kind: Some(USER_KIND.to_string()),
            sections,
        };
        self.register(id.clone(), document);
        id
    }

    /// Looks up a document by id.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, document)| document)
    }

    /// Returns true if a document is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Registered ids, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Listing summaries, in registration order.
    pub fn summaries(&self) -> Vec<DocumentSummary> {
        self.entries
            .iter()
            .map(|(id, document)| document.summary(id))
            .collect()
    }

    /// Number of registered documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no documents are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// File name without extension.
fn file_stem(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}
