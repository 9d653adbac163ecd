//! Backslash escapes.

/// Punctuation that a backslash turns into a literal.
const ESCAPABLE: &[char] = &[
    '\\', '`', '*', '_', '{', '}', '[', ']', '<', '>', '(', ')', '#', '+', '-', '.', '!', '|',
    '^', '$',
];

pub(crate) fn is_escapable(c: char) -> bool {
    ESCAPABLE.contains(&c)
}

/// The literal character of an escape at the start of `text`.
pub fn try_parse_escape(text: &str) -> Option<char> {
    let mut chars = text.chars();
    if chars.next()? != '\\' {
        return None;
    }
    chars.next().filter(|&c| is_escapable(c))
}

/// Byte offset just past the escape at the start of `text`, if any.
pub(crate) fn escape_len(text: &str) -> Option<usize> {
    try_parse_escape(text).map(|c| 1 + c.len_utf8())
}
