//! Library ids derived from document titles.

/// Generates a library id from a document title.
///
/// The title is lowercased and every character outside `[a-z0-9]` becomes `-`.
/// Consecutive hyphens are kept, so the id length tracks the title's character count.
pub fn content_id(title: &str) -> String {
    title
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect()
}
