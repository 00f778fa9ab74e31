use super::types::Granularity;

/// Split `text` into tokens for the given granularity.
///
/// Tokens borrow from `text`. Empty input yields no tokens whatever the granularity.
pub fn tokenize(text: &str, granularity: Granularity) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    match granularity {
        // no trimming, a trailing newline leaves an empty last line
        Granularity::Lines => text.split('\n').collect(),
        Granularity::Words => text.split_whitespace().collect(),
        Granularity::Characters => text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect(),
    }
}
