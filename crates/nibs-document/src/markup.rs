//! Markup stripping.

/// Removes every `<...>` tag span from markup.
///
/// A tag is a `<` followed by any run of characters other than `>` and a closing `>`.
/// An unclosed `<` and everything after it are kept verbatim. Entities are not decoded.
pub fn strip_markup(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);

    out
}
