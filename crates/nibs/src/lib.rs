//! nibs: accessible document reader
//!
//! nibs reads structured documents (sections of subsections, stored as TOML or JSON files)
//! from configured libraries. A persistent reading session tracks the current document and
//! position, answers free-text searches against an in-memory index, and collects snippets
//! and notes that compile into a study document. Every outcome is reported as a short
//! status notice suitable for a screen reader.

#![warn(missing_docs)]

pub mod cli;
