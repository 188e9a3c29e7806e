//! Word splitting.
//!
//! Words are maximal runs of ASCII letters, digits and `_`. Everything else separates words.

/// Returns true for characters that belong to a word.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits text into words, skipping empty pieces.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
}

/// Splits text into indexable tokens: words of at least `min_length` characters.
pub fn tokenize(text: &str, min_length: usize) -> impl Iterator<Item = &str> {
    split_words(text).filter(move |word| word.len() >= min_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_punctuation_runs() {
        let words: Vec<_> = split_words("air, has -- weight!").collect();
        assert_eq!(words, vec!["air", "has", "weight"]);
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        let words: Vec<_> = split_words("snake_case 1991 co2").collect();
        assert_eq!(words, vec!["snake_case", "1991", "co2"]);
    }

    #[test]
    fn test_non_ascii_splits() {
        let words: Vec<_> = split_words("naïve café").collect();
        assert_eq!(words, vec!["na", "ve", "caf"]);
    }

    #[test]
    fn test_tokenize_drops_short_words() {
        let tokens: Vec<_> = tokenize("it is an air pump", 3).collect();
        assert_eq!(tokens, vec!["air", "pump"]);
    }

    #[test]
    fn test_tokenize_configurable_length() {
        let tokens: Vec<_> = tokenize("it is an air pump", 4).collect();
        assert_eq!(tokens, vec!["pump"]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(split_words("").count(), 0);
        assert_eq!(split_words(" ,.; ").count(), 0);
    }
}
