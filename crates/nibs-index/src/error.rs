//! Error types for the nibs-index crate.

use thiserror::Error;

/// Errors that can occur while executing a search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// No document is loaded, so there is no index to search.
    #[error("no document loaded")]
    NoDocument,
}
