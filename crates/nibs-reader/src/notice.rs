//! Status notices and their delivery.
//!
//! Every user-visible status message the reader produces is a [`Notice`]. The wording
//! rendered by `Display` is what assistive output reads aloud, so it is kept stable.

use std::{fmt, mem};

use log::info;

/// Longest snippet prefix quoted in a "Snippet created" notice, in characters.
pub const SNIPPET_PREVIEW_CHARS: usize = 50;

/// A short status message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A document was loaded.
    Loaded {
        /// Document title.
        title: String,
    },
    /// A subsection is now displayed.
    NowDisplaying {
        /// `"<section title> - <subsection title>"`.
        label: String,
    },
    /// A section or subsection id did not resolve.
    SectionNotFound,
    /// Display was requested with no document loaded.
    ErrorLoadingSection,
    /// A search matched subsections.
    Found {
        /// Number of distinct subsections.
        count: usize,
        /// Normalized query.
        query: String,
    },
    /// A search matched nothing.
    NoResults {
        /// Normalized query.
        query: String,
    },
    /// A search failed.
    SearchFailure,
    /// Highlight mode was switched.
    HighlightMode {
        /// New state.
        enabled: bool,
    },
    /// A snippet was created.
    SnippetCreated {
        /// First characters of the snippet text.
        preview: String,
    },
    /// A snippet deletion was requested.
    SnippetDeleted,
    /// Notes were stored.
    NotesSaved,
    /// A study document was requested with no snippets.
    NoSnippets,
    /// A study document was compiled.
    StudyDocumentCreated {
        /// Number of snippets used.
        count: usize,
    },
    /// Text size changed (or was clamped).
    TextSize {
        /// Size in pixels.
        pixels: u32,
    },
}

impl Notice {
    /// Builds a "Snippet created" notice from the full snippet text.
    pub fn snippet_created(text: &str) -> Self {
        Self::SnippetCreated {
            preview: text.chars().take(SNIPPET_PREVIEW_CHARS).collect(),
        }
    }

    /// Returns true for notices reporting that a request could not be served.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::SectionNotFound | Self::ErrorLoadingSection | Self::SearchFailure
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded { title } => write!(f, "Loaded: {title}"),
            Self::NowDisplaying { label } => write!(f, "Now displaying: {label}"),
            Self::SectionNotFound => write!(f, "Section not found"),
            Self::ErrorLoadingSection => write!(f, "Error loading section"),
            Self::Found { count, query } => write!(f, "Found {count} results for {query}"),
            Self::NoResults { query } => write!(f, "No results found for {query}"),
            Self::SearchFailure => write!(f, "Search error occurred"),
            Self::HighlightMode { enabled: true } => write!(f, "Highlight mode enabled"),
            Self::HighlightMode { enabled: false } => write!(f, "Highlight mode disabled"),
            Self::SnippetCreated { preview } => write!(f, "Snippet created: {preview}..."),
            Self::SnippetDeleted => write!(f, "Snippet deleted"),
            Self::NotesSaved => write!(f, "Notes saved"),
            Self::NoSnippets => write!(f, "No snippets available to create document"),
            Self::StudyDocumentCreated { count } => {
                write!(f, "Document created from {count} snippets")
            }
            Self::TextSize { pixels } => write!(f, "Text size adjusted to {pixels} pixels"),
        }
    }
}

/// Delivers notices to the user.
pub trait Announcer {
    /// Delivers one notice.
    fn announce(&mut self, notice: Notice);
}

/// Keeps every notice in delivery order.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnnouncer {
    /// Delivered notices, oldest first.
    notices: Vec<Notice>,
}

impl RecordingAnnouncer {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices delivered so far, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Rendered messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.notices.iter().map(ToString::to_string).collect()
    }

    /// The most recent notice.
    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Removes and returns all recorded notices.
    pub fn take(&mut self) -> Vec<Notice> {
        mem::take(&mut self.notices)
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Forwards notices to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce(&mut self, notice: Notice) {
        info!("{notice}");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use log::{Level, LevelFilter, Log, Metadata, Record, set_logger, set_max_level};

    use super::*;

    /// Keeps every record logged by any test in this binary.
    struct CapturedLog(Mutex<Vec<(Level, String)>>);

    impl Log for CapturedLog {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            if let Ok(mut records) = self.0.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    /// Installed as the global logger by the announcer test.
    static CAPTURED: CapturedLog = CapturedLog(Mutex::new(Vec::new()));

    #[test]
    fn test_wording() {
        let cases = [
            (
                Notice::Loaded {
                    title: "Barometers".into(),
                },
                "Loaded: Barometers",
            ),
            (
                Notice::NowDisplaying {
                    label: "Intro - What".into(),
                },
                "Now displaying: Intro - What",
            ),
            (Notice::SectionNotFound, "Section not found"),
            (Notice::ErrorLoadingSection, "Error loading section"),
            (
                Notice::Found {
                    count: 3,
                    query: "air".into(),
                },
                "Found 3 results for air",
            ),
            (
                Notice::NoResults {
                    query: "zzz".into(),
                },
                "No results found for zzz",
            ),
            (Notice::SearchFailure, "Search error occurred"),
            (
                Notice::HighlightMode { enabled: true },
                "Highlight mode enabled",
            ),
            (
                Notice::HighlightMode { enabled: false },
                "Highlight mode disabled",
            ),
            (Notice::SnippetDeleted, "Snippet deleted"),
            (Notice::NotesSaved, "Notes saved"),
            (Notice::NoSnippets, "No snippets available to create document"),
            (
                Notice::StudyDocumentCreated { count: 2 },
                "Document created from 2 snippets",
            ),
            (
                Notice::TextSize { pixels: 18 },
                "Text size adjusted to 18 pixels",
            ),
        ];

        for (notice, expected) in cases {
            assert_eq!(notice.to_string(), expected);
        }
    }

    #[test]
    fn test_snippet_preview_truncates_to_fifty_chars() {
        let text = "é".repeat(60);
        let notice = Notice::snippet_created(&text);
        assert_eq!(
            notice.to_string(),
            format!("Snippet created: {}...", "é".repeat(50))
        );
    }

    #[test]
    fn test_short_snippet_preview_keeps_ellipsis() {
        assert_eq!(
            Notice::snippet_created("air").to_string(),
            "Snippet created: air..."
        );
    }

    #[test]
    fn test_recording_announcer() {
        let mut announcer = RecordingAnnouncer::new();
        announcer.announce(Notice::NotesSaved);
        announcer.announce(Notice::SnippetDeleted);

        assert_eq!(announcer.messages(), vec!["Notes saved", "Snippet deleted"]);
        assert_eq!(announcer.last(), Some(&Notice::SnippetDeleted));
        assert_eq!(announcer.take().len(), 2);
        assert!(announcer.notices().is_empty());
    }

    #[test]
    fn test_failure_classification() {
        assert!(Notice::SearchFailure.is_failure());
        assert!(Notice::SectionNotFound.is_failure());
        assert!(!Notice::NotesSaved.is_failure());
    }

    #[test]
    fn test_log_announcer_logs_wording_at_info() {
        set_logger(&CAPTURED).unwrap();
        set_max_level(LevelFilter::Info);

        let mut announcer = LogAnnouncer;
        announcer.announce(Notice::TextSize { pixels: 18 });
        announcer.announce(Notice::SearchFailure);

        let records = CAPTURED.0.lock().unwrap();
        for message in ["Text size adjusted to 18 pixels", "Search error occurred"] {
            assert!(
                records
                    .iter()
                    .any(|(level, text)| *level == Level::Info && text == message),
                "{message:?} not logged at info: {records:?}"
            );
        }
    }
}
