//! Reader session, content library and study tools for nibs.
//!
//! This crate ties documents, configuration and the search index together:
//! - [`ContentLibrary`] discovers and parses the documents configured libraries contain
//! - [`ReaderSession`] tracks the loaded document, reading position, search results,
//!   snippets, notes and text size, and reports every outcome as a [`Notice`]
//! - [`SessionState`] persists a session between invocations
//!
//! # Example
//!
//! ```
//! use nibs_config::{ReaderSettings, SearchSettings};
//! use nibs_document::{Document, Section, Subsection};
//! use nibs_reader::{RecordingAnnouncer, ReaderSession};
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
//! let mut session = ReaderSession::new(
//!     ReaderSettings::default(),
//!     SearchSettings::default(),
//!     RecordingAnnouncer::new(),
//! );
//! session.load_document("pressure", doc);
//! session.search("weight");
//!
//! assert_eq!(
//!     session.announcer().messages().last().map(String::as_str),
//!     Some("Found 1 results for weight")
//! );
//! ```

#![warn(missing_docs)]

mod discovery;
mod error;
mod library;
mod location;
mod notice;
mod session;
mod snippets;
mod store;
mod study;

pub use discovery::{DiscoveredFile, discover_files};
pub use error::ReaderError;
pub use library::{ContentLibrary, LoadWarning};
pub use location::{Position, SectionOutline, SubsectionOutline, location_label, outline};
pub use notice::{
    Announcer, LogAnnouncer, Notice, RecordingAnnouncer, SNIPPET_PREVIEW_CHARS,
};
pub use session::ReaderSession;
pub use snippets::Snippet;
pub use store::{SessionState, global_state_path, state_path};
pub use study::render_study_document;
