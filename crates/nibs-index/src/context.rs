//! Context windows around matched tokens.

/// Returns the text surrounding the first occurrence of `token`.
///
/// The window spans `radius` characters before the match and `radius` characters after it,
/// clamped to the text bounds. The search is a plain substring search, so a token that also
/// appears inside an earlier, longer word is located there.
///
/// Returns `None` when the token does not occur in the text.
pub fn extract_context<'a>(text: &'a str, token: &str, radius: usize) -> Option<&'a str> {
    let start_of_match = text.find(token)?;
    let end_of_match = start_of_match + token.len();

    let start = text[..start_of_match]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start_of_match, |(i, _)| i);

    let end = text[end_of_match..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end_of_match + i);

    Some(&text[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_inside_text() {
        let text = "0123456789 target 0123456789";
        assert_eq!(extract_context(text, "target", 3), Some("89 target 01"));
    }

    #[test]
    fn test_clamps_at_start() {
        let text = "target and the rest of it";
        assert_eq!(extract_context(text, "target", 5), Some("target and "));
    }

    #[test]
    fn test_clamps_at_end() {
        let text = "leading words then target";
        assert_eq!(extract_context(text, "target", 5), Some("then target"));
    }

    #[test]
    fn test_whole_text_when_radius_is_large() {
        let text = "the atmosphere exerts pressure because air has weight";
        assert_eq!(extract_context(text, "pressure", 50), Some(text));
    }

    #[test]
    fn test_first_occurrence_inside_longer_word() {
        let text = "barometers measure air; a meter is a unit";
        assert_eq!(extract_context(text, "meter", 2), Some("rometers "));
    }

    #[test]
    fn test_multibyte_window() {
        let text = "ééé abc ééé";
        assert_eq!(extract_context(text, "abc", 2), Some("é abc é"));
    }

    #[test]
    fn test_zero_radius() {
        assert_eq!(extract_context("one two three", "two", 0), Some("two"));
    }

    #[test]
    fn test_missing_token() {
        assert_eq!(extract_context("one two three", "four", 10), None);
    }

    #[test]
    fn test_default_radius_window_length() {
        let text = format!("{}target{}", "a ".repeat(60), " b".repeat(60));
        let context = extract_context(&text, "target", 50).unwrap();
        assert_eq!(context.chars().count(), 106);
        assert!(context.contains("target"));
    }
}
