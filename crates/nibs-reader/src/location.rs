//! Reading positions and the document outline.

use nibs_document::Document;
use serde::{Deserialize, Serialize};

/// A displayed subsection, by identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Section identifier.
    pub section_id: String,
    /// Subsection identifier.
    pub subsection_id: String,
}

impl Position {
    /// Creates a position from identifiers.
    pub fn new(section_id: impl Into<String>, subsection_id: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            subsection_id: subsection_id.into(),
        }
    }
}

/// One section of the structure map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionOutline {
    /// Section identifier.
    pub id: String,
    /// Section title.
    pub title: String,
    /// Subsections in reading order.
    pub subsections: Vec<SubsectionOutline>,
}

/// One subsection of the structure map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubsectionOutline {
    /// Subsection identifier.
    pub id: String,
    /// Subsection title.
    pub title: String,
}

/// Builds the structure map of a document.
pub fn outline(document: &Document) -> Vec<SectionOutline> {
    document
        .sections
        .iter()
        .map(|section| SectionOutline {
            id: section.id.clone(),
            title: section.title.clone(),
            subsections: section
                .subsections
                .iter()
                .map(|sub| SubsectionOutline {
                    id: sub.id.clone(),
                    title: sub.title.clone(),
                })
                .collect(),
        })
        .collect()
}

/// Human-readable location: `"<section title> - <subsection title>"`.
///
/// Parts that do not resolve are left empty, so nothing displayed renders as `" - "`.
pub fn location_label(document: Option<&Document>, position: Option<&Position>) -> String {
    let section = document
        .zip(position)
        .and_then(|(doc, pos)| doc.section(&pos.section_id));
    let subsection = section
        .zip(position)
        .and_then(|(section, pos)| section.subsection(&pos.subsection_id));

    format!(
        "{} - {}",
        section.map_or("", |s| s.title.as_str()),
        subsection.map_or("", |s| s.title.as_str())
    )
}

#[cfg(test)]
mod tests {
    use nibs_document::{Section, Subsection};

    use super::*;

    fn document() -> Document {
        Document {
            id: None,
            title: "Barometers".into(),
            author: None,
            year: None,
            kind: None,
            sections: vec![Section {
                id: "measure".into(),
                title: "Measuring".into(),
                subsections: vec![Subsection {
                    id: "mercury".into(),
                    title: "Mercury Barometer".into(),
                    content: "<p>Torricelli</p>".into(),
                }],
            }],
        }
    }

    #[test]
    fn test_outline() {
        let outline = outline(&document());
        assert_eq!(outline.len(), 1);
        assert_eq!(outline[0].title, "Measuring");
        assert_eq!(outline[0].subsections[0].id, "mercury");
    }

    #[test]
    fn test_location_label() {
        let doc = document();
        let pos = Position::new("measure", "mercury");
        assert_eq!(
            location_label(Some(&doc), Some(&pos)),
            "Measuring - Mercury Barometer"
        );
    }

    #[test]
    fn test_location_label_empty_parts() {
        let doc = document();
        assert_eq!(location_label(None, None), " - ");
        assert_eq!(location_label(Some(&doc), None), " - ");

        let stale = Position::new("measure", "gone");
        assert_eq!(location_label(Some(&doc), Some(&stale)), "Measuring - ");
    }
}
