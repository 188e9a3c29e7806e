//! Query execution against a [`SearchIndex`].
//!
//! A query is trimmed, lowercased and split into terms the same way content is split.
//! Postings for every term are concatenated in term order, then deduplicated by
//! subsection, keeping the first occurrence.

use std::collections::HashSet;

use serde::Serialize;

use crate::{Posting, SearchError, SearchIndex, tokenize::split_words};

/// A matched subsection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Section identifier.
    pub section_id: String,
    /// Subsection identifier.
    pub subsection_id: String,
    /// Display label, `"<section title> - <subsection title>"`.
    pub label: String,
    /// Text around the matched token.
    pub context: String,
}

impl From<&Posting> for SearchHit {
    fn from(posting: &Posting) -> Self {
        Self {
            section_id: posting.section_id.clone(),
            subsection_id: posting.subsection_id.clone(),
            label: posting.label.clone(),
            context: posting.context.clone(),
        }
    }
}

/// Whether a search found anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No subsection matched.
    NoResults,
    /// This many distinct subsections matched.
    Found(usize),
}

/// The result of one executed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Trimmed, lowercased query.
    pub query: String,
    /// Terms the query was split into, in typed order.
    pub terms: Vec<String>,
    /// Postings matched before deduplication.
    pub raw_match_count: usize,
    /// Distinct subsections, in term order then document order.
    pub hits: Vec<SearchHit>,
}

impl SearchReport {
    /// Summarizes the report as found or not found.
    pub fn outcome(&self) -> SearchOutcome {
        if self.hits.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Found(self.hits.len())
        }
    }
}

/// Runs a query.
///
/// Returns `Ok(None)` when the query is empty after trimming; no search is performed.
/// Any other query fails with [`SearchError::NoDocument`] when there is no index.
pub fn execute(
    index: Option<&SearchIndex>,
    raw_query: &str,
) -> Result<Option<SearchReport>, SearchError> {
    let query = raw_query.trim().to_lowercase();
    if query.is_empty() {
        return Ok(None);
    }

    let index = index.ok_or(SearchError::NoDocument)?;
    let terms: Vec<String> = split_words(&query).map(str::to_string).collect();

    let matches: Vec<&Posting> = terms
        .iter()
        .filter_map(|term| index.postings(term))
        .flatten()
        .collect();

    let mut seen = HashSet::new();
    let hits = matches
        .iter()
        .filter(|p| seen.insert((p.section_id.as_str(), p.subsection_id.as_str())))
        .map(|p| SearchHit::from(*p))
        .collect();

    Ok(Some(SearchReport {
        query,
        terms,
        raw_match_count: matches.len(),
        hits,
    }))
}
