//! In-memory inverted search index for nibs.
//!
//! This crate provides the search core of the reader:
//! - Building a token to subsection index from a [`Document`](nibs_document::Document)
//! - Executing free-text queries with deduplicated, ordered results and context
//!
//! # Example
//!
//! ```
//! use nibs_document::{Document, Section, Subsection};
//! use nibs_index::{IndexOptions, SearchIndex, SearchOutcome, execute};
//!
//! let doc = Document {
//!     id: None,
//!     title: "Pressure".to_string(),
//!     author: None,
//!     year: None,
//!     kind: None,
//!     sections: vec![Section {
//!         id: "intro".to_string(),
//!         title: "Introduction".to_string(),
//!         subsections: vec![Subsection {
//!             id: "what".to_string(),
//!             title: "What is it?".to_string(),
//!             content: "<p>Air has weight.</p>".to_string(),
//!         }],
//!     }],
//! };
//!
//! let index = SearchIndex::build(&doc, &IndexOptions::default());
//! let report = execute(Some(&index), "weight").unwrap().unwrap();
//! assert_eq!(report.outcome(), SearchOutcome::Found(1));
//! ```

#![warn(missing_docs)]

mod context;
mod error;
mod index;
mod query;
mod tokenize;

pub use context::extract_context;
pub use error::SearchError;
pub use index::{
    DEFAULT_CONTEXT_RADIUS, DEFAULT_MIN_TOKEN_LENGTH, IndexOptions, Posting, SearchIndex,
};
pub use query::{SearchHit, SearchOutcome, SearchReport, execute};
pub use tokenize::{is_word_char, split_words, tokenize};
