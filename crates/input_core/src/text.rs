//! UTF-8 text utilities for caret handling.
//!
//! Handles store carets as byte offsets. Masking engines usually reason in
//! characters, so this module also converts between the two.

use std::borrow::Cow;

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// Indices beyond the end clamp to `s.len()`; indices inside a multi-byte
/// character move back to the start of that character.
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 2), 1);
/// assert_eq!(clamp_to_char_boundary(s, 100), 5);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Find the previous valid caret position before `i`, or 0 at the start.
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i == 0 {
        return 0;
    }
    s[..i]
        .char_indices()
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Find the next valid caret position after `i`, or `s.len()` at the end.
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i >= s.len() {
        return s.len();
    }

    let mut it = s[i..].char_indices();
    let _ = it.next();
    it.next().map(|(idx, _)| i + idx).unwrap_or(s.len())
}

/// Strip CR and LF, for single-line handles.
///
/// ```
/// use input_core::filter_single_line;
///
/// assert_eq!(filter_single_line("(555) 12\r\n3"), "(555) 123");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains('\n') && !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| *c != '\n' && *c != '\r').collect())
}

/// Convert a character offset into a byte offset. Offsets past the end map to `s.len()`.
///
/// ```
/// use input_core::char_to_byte_offset;
///
/// assert_eq!(char_to_byte_offset("a€b", 2), 4);
/// assert_eq!(char_to_byte_offset("a€b", 9), 5);
/// ```
pub fn char_to_byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map(|(i, _)| i).unwrap_or(s.len())
}

/// Convert a byte offset into a character offset, clamping to a boundary first.
///
/// ```
/// use input_core::byte_to_char_offset;
///
/// assert_eq!(byte_to_char_offset("a€b", 4), 2);
/// assert_eq!(byte_to_char_offset("a€b", 3), 1);
/// ```
pub fn byte_to_char_offset(s: &str, bytes: usize) -> usize {
    let bytes = clamp_to_char_boundary(s, bytes);
    s[..bytes].chars().count()
}
