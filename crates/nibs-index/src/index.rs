//! Inverted index construction.

use std::collections::{HashMap, HashSet};

use log::debug;
use nibs_document::{Document, strip_markup};
use serde::Serialize;

use crate::{context::extract_context, tokenize::tokenize};

/// Default minimum token length in characters.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

/// Default number of context characters on each side of a match.
pub const DEFAULT_CONTEXT_RADIUS: usize = 50;

/// Tuning for index construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    /// Tokens shorter than this are not indexed.
    pub min_token_length: usize,
    /// Characters of context kept on each side of a token's first occurrence.
    pub context_radius: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            context_radius: DEFAULT_CONTEXT_RADIUS,
        }
    }
}

/// One indexed occurrence of a token: the subsection it appears in plus context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Posting {
    /// Section identifier.
    pub section_id: String,
    /// Subsection identifier.
    pub subsection_id: String,
    /// Display label, `"<section title> - <subsection title>"`.
    pub label: String,
    /// Stripped, lowercased text around the token's first occurrence.
    pub context: String,
}

/// Token to postings map for a single document.
///
/// The index is built in one pass and never updated incrementally; loading a new document
/// means building a new index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    /// Postings per token, in document traversal order.
    entries: HashMap<String, Vec<Posting>>,
}

impl SearchIndex {
    /// Builds the index for a document.
    ///
    /// Every subsection's content is stripped of markup and lowercased, then split into
    /// tokens. Each distinct token in a subsection contributes exactly one posting.
    pub fn build(document: &Document, options: &IndexOptions) -> Self {
        let mut entries: HashMap<String, Vec<Posting>> = HashMap::new();

        for section in &document.sections {
            for subsection in &section.subsections {
                let text = strip_markup(&subsection.content).to_lowercase();
                let label = section.label(subsection);
                let mut seen = HashSet::new();

                for token in tokenize(&text, options.min_token_length) {
                    if !seen.insert(token) {
                        continue;
                    }

                    let context = extract_context(&text, token, options.context_radius)
                        .unwrap_or_default();
                    entries.entry(token.to_string()).or_default().push(Posting {
                        section_id: section.id.clone(),
                        subsection_id: subsection.id.clone(),
                        label: label.clone(),
                        context: context.to_string(),
                    });
                }
            }
        }

        let index = Self { entries };
        debug!(
            "indexed '{}': {} tokens, {} postings",
            document.title,
            index.len(),
            index.posting_count()
        );
        index
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Postings for a token, in document traversal order.
    pub fn postings(&self, token: &str) -> Option<&[Posting]> {
        self.entries.get(token).map(Vec::as_slice)
    }

    /// All indexed tokens, sorted.
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        tokens.sort_unstable();
        tokens
    }

    /// Total number of postings across all tokens.
    pub fn posting_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use nibs_document::{Section, Subsection};

    use super::*;

    fn document(sections: Vec<(&str, Vec<(&str, &str)>)>) -> Document {
        Document {
            id: None,
            title: "Test".into(),
            author: None,
            year: None,
            kind: None,
            sections: sections
                .into_iter()
                .map(|(id, subsections)| Section {
                    id: id.into(),
                    title: id.to_uppercase(),
                    subsections: subsections
                        .into_iter()
                        .map(|(id, content)| Subsection {
                            id: id.into(),
                            title: id.to_uppercase(),
                            content: content.into(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_document() {
        let index = SearchIndex::build(&document(vec![]), &IndexOptions::default());
        assert!(index.is_empty());
        assert_eq!(index.posting_count(), 0);
    }

    #[test]
    fn test_markup_stripped_and_lowercased() {
        let doc = document(vec![(
            "intro",
            vec![("what", "<p>Air has <strong>WEIGHT</strong></p>")],
        )]);
        let index = SearchIndex::build(&doc, &IndexOptions::default());

        assert_eq!(index.tokens(), vec!["air", "has", "weight"]);
        assert!(index.postings("strong").is_none());
        let postings = index.postings("weight").unwrap();
        assert_eq!(postings[0].label, "INTRO - WHAT");
        assert_eq!(postings[0].context, "air has weight");
    }

    #[test]
    fn test_one_posting_per_subsection() {
        let doc = document(vec![(
            "intro",
            vec![("a", "air air air"), ("b", "more air")],
        )]);
        let index = SearchIndex::build(&doc, &IndexOptions::default());

        let postings = index.postings("air").unwrap();
        let ids: Vec<_> = postings.iter().map(|p| p.subsection_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_postings_follow_traversal_order() {
        let doc = document(vec![
            ("second", vec![("x", "pressure")]),
            ("first", vec![("y", "pressure"), ("z", "pressure")]),
        ]);
        let index = SearchIndex::build(&doc, &IndexOptions::default());

        let order: Vec<_> = index
            .postings("pressure")
            .unwrap()
            .iter()
            .map(|p| (p.section_id.as_str(), p.subsection_id.as_str()))
            .collect();
        assert_eq!(order, vec![("second", "x"), ("first", "y"), ("first", "z")]);
    }

    #[test]
    fn test_min_token_length_option() {
        let doc = document(vec![("s", vec![("a", "an air pump")])]);

        let default = SearchIndex::build(&doc, &IndexOptions::default());
        assert_eq!(default.tokens(), vec!["air", "pump"]);

        let options = IndexOptions {
            min_token_length: 2,
            ..IndexOptions::default()
        };
        let short = SearchIndex::build(&doc, &options);
        assert_eq!(short.tokens(), vec!["air", "an", "pump"]);
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let doc = document(vec![
            ("a", vec![("one", "<p>Mercury barometer</p>")]),
            ("b", vec![("two", "aneroid barometer")]),
        ]);
        let first = SearchIndex::build(&doc, &IndexOptions::default());
        let second = SearchIndex::build(&doc, &IndexOptions::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_leaves_document_untouched() {
        let doc = document(vec![("a", vec![("one", "<p>Mercury</p>")])]);
        let before = doc.clone();
        let _ = SearchIndex::build(&doc, &IndexOptions::default());
        assert_eq!(doc, before);
    }
}
