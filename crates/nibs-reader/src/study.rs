//! Study documents compiled from snippets.

use crate::Snippet;

/// Heading of every study document.
const STUDY_TITLE: &str = "My Study Document";

/// Renders snippets as a study document in markup.
///
/// `created` is the human-readable creation timestamp quoted in the header. Snippet text
/// and sources are inserted as-is.
pub fn render_study_document(snippets: &[Snippet], created: &str) -> String {
    let mut out = format!(
        "<h2>{STUDY_TITLE}</h2>\n<p>Created from {} snippets on {created}</p>\n\n",
        snippets.len()
    );

    for (i, snippet) in snippets.iter().enumerate() {
        out.push_str(&format!(
            "<div class=\"snippet-section\"><h3>Extract {}</h3><blockquote>{}</blockquote><p><em>Source: {}</em></p></div>\n\n",
            i + 1,
            snippet.text,
            snippet.source
        ));
    }

    out
}
