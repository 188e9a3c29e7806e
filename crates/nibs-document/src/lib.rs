//! Document model and parsing for nibs.
//!
//! A document is an ordered list of sections, each holding an ordered list of subsections
//! with inline HTML markup content. Documents load from TOML or JSON files and are
//! immutable once loaded.

#![warn(missing_docs)]

mod error;
mod markup;
mod parse;
mod slug;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use error::DocumentError;
pub use markup::strip_markup;
pub use parse::{DocumentFormat, parse_document_file, parse_document_str};
pub use slug::content_id;

/// A structured document: title, optional metadata and ordered sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Explicit library id. Files without one are registered under their file stem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display title.
    pub title: String,
    /// Author credit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Publication year, kept as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Kind of content, e.g. "science", "research" or "custom".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Sections in reading order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A top-level division of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Identifier, unique within the document.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Subsections in reading order.
    #[serde(default)]
    pub subsections: Vec<Subsection>,
}

/// The smallest navigable unit of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    /// Identifier, unique within the parent section.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Raw inline markup.
    pub content: String,
}

/// Listing metadata for a library document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    /// Library id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Author credit.
    pub author: Option<String>,
    /// Kind of content.
    pub kind: Option<String>,
    /// Publication year.
    pub year: Option<String>,
    /// Number of sections.
    pub section_count: usize,
}

impl Document {
    /// Finds a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Resolves a section/subsection pair.
    pub fn locate(&self, section_id: &str, subsection_id: &str) -> Option<(&Section, &Subsection)> {
        let section = self.section(section_id)?;
        let subsection = section.subsection(subsection_id)?;
        Some((section, subsection))
    }

    /// The first subsection of the first section, if the document has one.
    pub fn first_position(&self) -> Option<(&Section, &Subsection)> {
        let section = self.sections.first()?;
        let subsection = section.subsections.first()?;
        Some((section, subsection))
    }

    /// Total number of subsections across all sections.
    pub fn subsection_count(&self) -> usize {
        self.sections.iter().map(|s| s.subsections.len()).sum()
    }

    /// Checks identifier uniqueness.
    ///
    /// Section ids must be unique within the document, subsection ids within their section.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut sections = HashSet::new();
        for section in &self.sections {
            if !sections.insert(section.id.as_str()) {
                return Err(DocumentError::DuplicateId {
                    id: section.id.clone(),
                    scope: "document".into(),
                });
            }

            let mut subsections = HashSet::new();
            for subsection in &section.subsections {
                if !subsections.insert(subsection.id.as_str()) {
                    return Err(DocumentError::DuplicateId {
                        id: subsection.id.clone(),
                        scope: format!("section '{}'", section.id),
                    });
                }
            }
        }
        Ok(())
    }

    /// Builds the listing summary for this document under a library id.
    pub fn summary(&self, id: &str) -> DocumentSummary {
        DocumentSummary {
            id: id.to_string(),
            title: self.title.clone(),
            author: self.author.clone(),
            kind: self.kind.clone(),
            year: self.year.clone(),
            section_count: self.sections.len(),
        }
    }
}

impl Section {
    /// Finds a subsection by id.
    pub fn subsection(&self, id: &str) -> Option<&Subsection> {
        self.subsections.iter().find(|s| s.id == id)
    }

    /// Display label for a subsection of this section: `"<section> - <subsection>"`.
    pub fn label(&self, subsection: &Subsection) -> String {
        format!("{} - {}", self.title, subsection.title)
    }
}

impl Subsection {
    /// Content with all markup tags removed.
    pub fn plain_text(&self) -> String {
        strip_markup(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subsection(id: &str, title: &str, content: &str) -> Subsection {
        Subsection {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    fn sample() -> Document {
        Document {
            id: None,
            title: "Atmospheric Pressure and Barometers".into(),
            author: Some("Educational Sciences".into()),
            year: None,
            kind: Some("science".into()),
            sections: vec![
                Section {
                    id: "intro".into(),
                    title: "Introduction".into(),
                    subsections: vec![
                        subsection("what", "What is Pressure?", "<p>Air has weight.</p>"),
                        subsection("effects", "Effects", "<p>Ears pop.</p>"),
                    ],
                },
                Section {
                    id: "measuring".into(),
                    title: "Measuring".into(),
                    subsections: vec![subsection("mercury", "Mercury Barometer", "Torricelli")],
                },
            ],
        }
    }

    #[test]
    fn test_locate() {
        let doc = sample();
        let (section, subsection) = doc.locate("measuring", "mercury").unwrap();
        assert_eq!(section.title, "Measuring");
        assert_eq!(subsection.content, "Torricelli");

        assert!(doc.locate("measuring", "what").is_none());
        assert!(doc.locate("missing", "what").is_none());
    }

    #[test]
    fn test_first_position() {
        let doc = sample();
        let (section, subsection) = doc.first_position().unwrap();
        assert_eq!(section.id, "intro");
        assert_eq!(subsection.id, "what");

        let mut empty = sample();
        empty.sections[0].subsections.clear();
        assert!(empty.first_position().is_none());
    }

    #[test]
    fn test_label() {
        let doc = sample();
        let (section, subsection) = doc.locate("intro", "effects").unwrap();
        assert_eq!(section.label(subsection), "Introduction - Effects");
    }

    #[test]
    fn test_plain_text() {
        let doc = sample();
        let (_, subsection) = doc.locate("intro", "what").unwrap();
        assert_eq!(subsection.plain_text(), "Air has weight.");
    }

    #[test]
    fn test_validate_accepts_reused_subsection_ids_across_sections() {
        let mut doc = sample();
        doc.sections[1].subsections[0].id = "what".into();
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_section() {
        let mut doc = sample();
        doc.sections[1].id = "intro".into();
        let err = doc.validate().unwrap_err();
        assert_eq!(err.to_string(), "duplicate id 'intro' in document");
    }

    #[test]
    fn test_validate_duplicate_subsection() {
        let mut doc = sample();
        doc.sections[0].subsections[1].id = "what".into();
        let err = doc.validate().unwrap_err();
        assert_eq!(err.to_string(), "duplicate id 'what' in section 'intro'");
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary("atmospheric-pressure");
        assert_eq!(summary.id, "atmospheric-pressure");
        assert_eq!(summary.kind.as_deref(), Some("science"));
        assert_eq!(summary.section_count, 2);
        assert_eq!(sample().subsection_count(), 3);
    }
}
