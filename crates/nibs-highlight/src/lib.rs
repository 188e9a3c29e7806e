//! Syntax highlighting and terminal colors for nibs.
//!
//! This crate provides syntax-highlighted output for configuration and document markup,
//! styled terminal output for headers and status messages, and emphasis of matched
//! query terms inside search context.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Languages the reader renders with syntax colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// `.nibs.toml` files and effective settings.
    Toml,
    /// Raw subsection content, which is HTML-like markup.
    Markup,
}

impl Syntax {
    /// File extension syntect knows the language by.
    fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Markup => "html",
        }
    }
}

/// Renders text with 24-bit terminal colors (Dracula theme).
pub struct Highlighter {
    /// Language definitions.
    syntaxes: SyntaxSet,
    /// Lazily decoded themes.
    themes: EmbeddedLazyThemeSet,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Loads the bundled syntaxes and themes.
    pub fn new() -> Self {
        Self {
            syntaxes: extra_syntaxes(),
            themes: extra_themes(),
        }
    }

    /// Shorthand for [`Syntax::Toml`].
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, Syntax::Toml)
    }

    /// Shorthand for [`Syntax::Markup`].
    pub fn highlight_markup(&self, content: &str) -> String {
        self.highlight(content, Syntax::Markup)
    }

    /// Colors `content` line by line. Lines syntect cannot parse are left unstyled.
    ///
    /// The result always ends with a reset so colors never leak into later output.
    pub fn highlight(&self, content: &str, syntax: Syntax) -> String {
        let definition = self
            .syntaxes
            .find_syntax_by_extension(syntax.extension())
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());
        let theme = self.themes.get(EmbeddedThemeName::Dracula);
        let mut lines = HighlightLines::new(definition, theme);

        let mut output: String = LinesWithEndings::from(content)
            .map(|line| {
                let ranges = lines
                    .highlight_line(line, &self.syntaxes)
                    .unwrap_or_else(|_| vec![(Style::default(), line)]);
                as_24_bit_terminal_escaped(&ranges, false)
            })
            .collect();
        output.push_str(colors::RESET);
        output
    }
}

/// ANSI escape codes.
pub mod colors {
    /// Bold.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan, used for headers.
    pub const CYAN: &str = "\x1b[36m";
    /// Green, used for reader notices.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow, used for warnings and matched terms.
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim.
    pub const DIM: &str = "\x1b[2m";
    /// Clears all styling.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps `text` in the given escape codes followed by a reset.
fn paint(codes: &[&str], text: &str) -> String {
    let mut out = codes.concat();
    out.push_str(text);
    out.push_str(colors::RESET);
    out
}

/// Document and section titles: bold cyan.
pub fn header(text: &str) -> String {
    paint(&[colors::BOLD, colors::CYAN], text)
}

/// Labels and list headings: bold.
pub fn subheader(text: &str) -> String {
    paint(&[colors::BOLD], text)
}

/// Ids, paths and other secondary detail.
pub fn dim(text: &str) -> String {
    paint(&[colors::DIM], text)
}

/// A reader notice such as "Notes saved".
pub fn notice(text: &str) -> String {
    paint(&[colors::GREEN], text)
}

/// A notice for a request that could not be served, or a skipped file.
pub fn warning(text: &str) -> String {
    paint(&[colors::YELLOW], text)
}

/// A dimmed horizontal line `width` columns wide.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}

/// Emphasizes every whole word of `text` that equals one of `terms` (bold yellow).
///
/// Words are runs of ASCII letters, digits and `_`, compared case-insensitively.
pub fn emphasize_terms(text: &str, terms: &[String]) -> String {
    let mut output = String::with_capacity(text.len());
    let mut word_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_ascii_alphanumeric() || c == '_' {
            word_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = word_start.take() {
            push_word(&mut output, &text[start..i], terms);
        }
        output.push(c);
    }
    if let Some(start) = word_start {
        push_word(&mut output, &text[start..], terms);
    }

    output
}

/// Appends a word, emphasized when it is a term.
fn push_word(output: &mut String, word: &str, terms: &[String]) {
    if terms.iter().any(|t| t.eq_ignore_ascii_case(word)) {
        output.push_str(&paint(&[colors::BOLD, colors::YELLOW], word));
    } else {
        output.push_str(word);
    }
}
