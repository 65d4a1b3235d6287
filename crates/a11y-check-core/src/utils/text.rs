//! Character-index helpers.
//!
//! Issue offsets count Unicode scalar values, not bytes, so hosts can map
//! them back onto their own text positions without knowing our encoding.

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the character at `index`, or `text.len()` past the end.
#[must_use]
pub fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Text between two character indices; out-of-range indices are clamped.
#[must_use]
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let from = byte_offset(text, start);
    let to = byte_offset(text, end.max(start));
    &text[from..to]
}

/// Character index of the first occurrence of `needle`.
#[must_use]
pub fn find_char_index(text: &str, needle: &str) -> Option<usize> {
    text.find(needle).map(|byte| text[..byte].chars().count())
}
