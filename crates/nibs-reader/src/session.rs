//! The reader session.
//!
//! A [`ReaderSession`] owns the loaded document, its search index, the reading position and
//! the user's study material. Every operation runs to completion and reports its outcome
//! through the session's [`Announcer`].

use chrono::{Local, Utc};
use log::{error, warn};
use nibs_config::{Config, ReaderSettings, SearchSettings};
use nibs_document::{Document, Section, Subsection};
use nibs_index::{IndexOptions, SearchIndex, SearchOutcome, SearchReport, execute};

use crate::{
    Announcer, ContentLibrary, Notice, Position, SectionOutline, SessionState, Snippet,
    location::{location_label, outline},
    study::render_study_document,
};

/// Timestamp format quoted in study documents.
const STUDY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A document loaded into the session.
#[derive(Debug, Clone)]
struct LoadedDocument {
    /// Library id.
    id: String,
    /// The document itself.
    document: Document,
    /// Index built from `document`.
    index: SearchIndex,
}

/// An interactive reading session.
#[derive(Debug)]
pub struct ReaderSession<A: Announcer> {
    /// Presentation settings.
    reader: ReaderSettings,
    /// Index and query settings.
    search: SearchSettings,
    /// Notice delivery.
    announcer: A,
    /// Current document and its index.
    loaded: Option<LoadedDocument>,
    /// Displayed subsection.
    position: Option<Position>,
    /// Results of the last executed search.
    last_results: Option<SearchReport>,
    /// Whether selections become snippets.
    highlight_mode: bool,
    /// Collected snippets, oldest first.
    snippets: Vec<Snippet>,
    /// Identifier for the next snippet.
    next_snippet_id: u64,
    /// Free-form notes.
    notes: String,
    /// Text size in pixels.
    text_size: u32,
}

impl<A: Announcer> ReaderSession<A> {
    /// Creates an empty session.
    pub fn new(reader: ReaderSettings, search: SearchSettings, announcer: A) -> Self {
        let text_size = clamp_text_size(i64::from(reader.text_size), &reader);
        Self {
            reader,
            search,
            announcer,
            loaded: None,
            position: None,
            last_results: None,
            highlight_mode: false,
            snippets: Vec::new(),
            next_snippet_id: 1,
            notes: String::new(),
            text_size,
        }
    }

    /// Creates an empty session using the configured settings.
    pub fn from_config(config: &Config, announcer: A) -> Self {
        Self::new(config.reader.clone(), config.search.clone(), announcer)
    }

    /// The notice sink.
    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    /// The notice sink, mutably.
    pub fn announcer_mut(&mut self) -> &mut A {
        &mut self.announcer
    }

    /// Replaces the current document and rebuilds the index.
    ///
    /// The first subsection of the first section is displayed, if there is one.
    pub fn load_document(&mut self, id: impl Into<String>, document: Document) {
        let title = document.title.clone();
        self.install(id.into(), document);

        let first = self.document().and_then(|doc| {
            doc.first_position()
                .map(|(section, subsection)| Position::new(&section.id, &subsection.id))
        });
        if let Some(first) = first {
            self.display(&first.section_id, &first.subsection_id);
        }

        self.announcer.announce(Notice::Loaded { title });
    }

    /// Loads a document from a library by id.
    ///
    /// Returns false, leaving the session unchanged, if the id is unknown.
    pub fn load_from_library(&mut self, library: &ContentLibrary, id: &str) -> bool {
        let Some(document) = library.get(id) else {
            error!("Content with ID '{id}' not found");
            return false;
        };
        self.load_document(id, document.clone());
        true
    }

    /// Sets the current document and index without announcing anything.
    fn install(&mut self, id: String, document: Document) {
        let options = IndexOptions {
            min_token_length: self.search.min_token_length,
            context_radius: self.search.context_radius,
        };
        let index = SearchIndex::build(&document, &options);
        self.loaded = Some(LoadedDocument {
            id,
            document,
            index,
        });
        self.position = None;
        self.last_results = None;
    }

    /// The current document.
    pub fn document(&self) -> Option<&Document> {
        self.loaded.as_ref().map(|loaded| &loaded.document)
    }

    /// Library id of the current document.
    pub fn document_id(&self) -> Option<&str> {
        self.loaded.as_ref().map(|loaded| loaded.id.as_str())
    }

    /// The current search index.
    pub fn index(&self) -> Option<&SearchIndex> {
        self.loaded.as_ref().map(|loaded| &loaded.index)
    }

    /// Displays a subsection.
    ///
    /// Returns the displayed subsection, or `None` if the identifiers do not resolve or no
    /// document is loaded. The previous position is kept on failure.
    pub fn display(&mut self, section_id: &str, subsection_id: &str) -> Option<&Subsection> {
        let Some(document) = self.document() else {
            self.announcer.announce(Notice::ErrorLoadingSection);
            return None;
        };

        let Some((section, subsection)) = document.locate(section_id, subsection_id) else {
            self.announcer.announce(Notice::SectionNotFound);
            return None;
        };

        let label = section.label(subsection);
        self.position = Some(Position::new(section_id, subsection_id));
        self.announcer.announce(Notice::NowDisplaying { label });
        self.current().map(|(_, subsection)| subsection)
    }

    /// Displays the first subsection of a section.
    ///
    /// An empty id is ignored. A section without subsections displays nothing.
    pub fn navigate_to_section(&mut self, section_id: &str) -> Option<&Subsection> {
        if section_id.is_empty() {
            return None;
        }

        let Some(document) = self.document() else {
            self.announcer.announce(Notice::ErrorLoadingSection);
            return None;
        };
        let first = match document.section(section_id) {
            Some(section) => section.subsections.first().map(|s| s.id.clone()),
            None => {
                self.announcer.announce(Notice::SectionNotFound);
                return None;
            }
        };

        let subsection_id = first?;
        self.display(section_id, &subsection_id)
    }

    /// Displays a subsection of the current section.
    ///
    /// An empty id, or no current section, is ignored.
    pub fn navigate_to_subsection(&mut self, subsection_id: &str) -> Option<&Subsection> {
        if subsection_id.is_empty() {
            return None;
        }
        let section_id = self.position.as_ref()?.section_id.clone();
        self.display(&section_id, subsection_id)
    }

    /// The displayed section and subsection.
    pub fn current(&self) -> Option<(&Section, &Subsection)> {
        let position = self.position.as_ref()?;
        self.document()?
            .locate(&position.section_id, &position.subsection_id)
    }

    /// The displayed position.
    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// `"<section title> - <subsection title>"` for the displayed position.
    pub fn current_location(&self) -> String {
        location_label(self.document(), self.position.as_ref())
    }

    /// Structure map of the current document.
    pub fn structure(&self) -> Vec<SectionOutline> {
        self.document().map(outline).unwrap_or_default()
    }

    /// Runs a search against the current document.
    ///
    /// An empty query does nothing and keeps the previous results. Failures are logged and
    /// announced; they never propagate.
    pub fn search(&mut self, query: &str) -> Option<&SearchReport> {
        let report = match execute(self.index(), query) {
            Ok(Some(report)) => report,
            Ok(None) => return None,
            Err(e) => {
                error!("search failed: {e}");
                self.announcer.announce(Notice::SearchFailure);
                return None;
            }
        };

        let notice = match report.outcome() {
            SearchOutcome::NoResults => Notice::NoResults {
                query: report.query.clone(),
            },
            SearchOutcome::Found(count) => Notice::Found {
                count,
                query: report.query.clone(),
            },
        };
        self.announcer.announce(notice);

        self.last_results = Some(report);
        self.last_results.as_ref()
    }

    /// Results of the most recent search that ran.
    pub fn last_results(&self) -> Option<&SearchReport> {
        self.last_results.as_ref()
    }

    /// Switches highlight mode and returns the new state.
    pub fn toggle_highlight_mode(&mut self) -> bool {
        self.highlight_mode = !self.highlight_mode;
        self.announcer.announce(Notice::HighlightMode {
            enabled: self.highlight_mode,
        });
        self.highlight_mode
    }

    /// Whether selections become snippets.
    pub fn highlight_mode(&self) -> bool {
        self.highlight_mode
    }

    /// Handles a text selection.
    ///
    /// Outside highlight mode, or for blank selections, nothing happens. Otherwise the trimmed
    /// text becomes a snippet and its id is returned.
    pub fn handle_selection(&mut self, text: &str) -> Option<u64> {
        if !self.highlight_mode {
            return None;
        }
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(self.create_snippet(text))
    }

    /// Creates a snippet sourced at the current location and returns its id.
    pub fn create_snippet(&mut self, text: &str) -> u64 {
        let id = self.next_snippet_id;
        self.next_snippet_id = id.saturating_add(1);

        let source = self.current_location();
        self.snippets.push(Snippet {
            id,
            text: text.to_string(),
            source,
            created_at: Utc::now(),
        });
        self.announcer.announce(Notice::snippet_created(text));
        id
    }

    /// Deletes a snippet. Returns true if it existed.
    ///
    /// The deletion notice is delivered either way.
    pub fn delete_snippet(&mut self, id: u64) -> bool {
        let before = self.snippets.len();
        self.snippets.retain(|s| s.id != id);
        self.announcer.announce(Notice::SnippetDeleted);
        self.snippets.len() != before
    }

    /// Collected snippets, oldest first.
    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Stores notes.
    pub fn save_notes(&mut self, text: &str) {
        self.notes = text.to_string();
        self.announcer.announce(Notice::NotesSaved);
    }

    /// Stored notes.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Compiles all snippets into a study document.
    ///
    /// Returns `None` when there are no snippets.
    pub fn create_study_document(&mut self) -> Option<String> {
        if self.snippets.is_empty() {
            self.announcer.announce(Notice::NoSnippets);
            return None;
        }

        let created = Local::now().format(STUDY_TIMESTAMP_FORMAT).to_string();
        let markup = render_study_document(&self.snippets, &created);
        self.announcer.announce(Notice::StudyDocumentCreated {
            count: self.snippets.len(),
        });
        Some(markup)
    }

    /// Changes text size by `delta` pixels, clamped to the configured bounds.
    pub fn adjust_text_size(&mut self, delta: i32) -> u32 {
        self.text_size = clamp_text_size(
            i64::from(self.text_size) + i64::from(delta),
            &self.reader,
        );
        self.announcer.announce(Notice::TextSize {
            pixels: self.text_size,
        });
        self.text_size
    }

    /// Increases text size by one configured step.
    pub fn increase_text_size(&mut self) -> u32 {
        self.adjust_text_size(step_delta(&self.reader))
    }

    /// Decreases text size by one configured step.
    pub fn decrease_text_size(&mut self) -> u32 {
        self.adjust_text_size(-step_delta(&self.reader))
    }

    /// Text size in pixels.
    pub fn text_size(&self) -> u32 {
        self.text_size
    }

    /// Captures the persistent parts of the session.
    pub fn state(&self) -> SessionState {
        SessionState {
            document_id: self.document_id().map(str::to_string),
            position: self.position.clone(),
            snippets: self.snippets.clone(),
            notes: self.notes.clone(),
            text_size: Some(self.text_size),
            highlight_mode: self.highlight_mode,
            next_snippet_id: self.next_snippet_id,
        }
    }

    /// Restores persisted state without announcing anything.
    ///
    /// The saved document is reloaded from `library`; a missing document or a position that
    /// no longer resolves is dropped with a warning. Without a saved document, the configured
    /// default document is loaded if the library has it.
    pub fn restore(&mut self, state: SessionState, library: &ContentLibrary) {
        let document_id = state
            .document_id
            .or_else(|| self.reader.default_document.clone());

        if let Some(id) = document_id {
            match library.get(&id) {
                Some(document) => self.install(id, document.clone()),
                None => warn!("saved document '{id}' is no longer in the library"),
            }
        }

        if let Some(position) = state.position
            && self.loaded.is_some()
        {
            if self
                .document()
                .and_then(|doc| doc.locate(&position.section_id, &position.subsection_id))
                .is_some()
            {
                self.position = Some(position);
            } else {
                warn!(
                    "saved position {} / {} no longer exists",
                    position.section_id, position.subsection_id
                );
            }
        }

        if self.position.is_none() {
            self.position = self.document().and_then(|doc| {
                doc.first_position()
                    .map(|(section, subsection)| Position::new(&section.id, &subsection.id))
            });
        }

        let highest_id = state.snippets.iter().map(|s| s.id).max().unwrap_or(0);
        self.next_snippet_id = state.next_snippet_id.max(highest_id.saturating_add(1));
        self.snippets = state.snippets;
        self.notes = state.notes;
        self.highlight_mode = state.highlight_mode;
        if let Some(size) = state.text_size {
            self.text_size = clamp_text_size(i64::from(size), &self.reader);
        }
    }
}

/// Clamps a text size into the configured bounds.
///
/// Inverted bounds resolve to the minimum.
fn clamp_text_size(size: i64, reader: &ReaderSettings) -> u32 {
    let clamped = size
        .min(i64::from(reader.max_text_size))
        .max(i64::from(reader.min_text_size));
    u32::try_from(clamped).unwrap_or(reader.min_text_size)
}

/// The configured step as a signed delta.
fn step_delta(reader: &ReaderSettings) -> i32 {
    i32::try_from(reader.text_size_step).unwrap_or(i32::MAX)
}
