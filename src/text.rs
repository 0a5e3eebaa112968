//! Text normalization and sentence splitting.

/// Collapse any run of whitespace to a single space and trim both ends.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Split normalized text into sentences.
///
/// A sentence ends at `.`, `!`, or `?` followed by whitespace; the trailing
/// fragment is included even without final punctuation. Sentences keep their
/// terminating punctuation.
pub fn split_sentences(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let mut sentences = Vec::new();
    let mut start = 0;

    let mut chars = normalized.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some(&(j, next)) = chars.peek() {
                if next.is_whitespace() {
                    sentences.push(normalized[start..=i].to_string());
                    start = j + next.len_utf8();
                }
            }
        }
    }
    if start < normalized.len() {
        sentences.push(normalized[start..].to_string());
    }
    sentences
}

/// Largest char-boundary index at or below `index`.
pub(crate) fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut i = index.min(text.len());
    while i > 0 && !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}
