//! Character-level helpers shared by the block and inline parsers.

/// Whitespace recognized when measuring indentation and separating markers.
///
/// Wider than `char::is_whitespace` in one way (it is a fixed list) and
/// narrower in another: line feeds are never whitespace here because lines
/// are split before any of these checks run.
pub fn is_md_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Returns the remainder of `s` after skipping `n` characters.
pub fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

/// Trim only recognized Markdown whitespace from the end of `s`.
pub fn trim_end_ws(s: &str) -> &str {
    s.trim_end_matches(|c: char| is_md_whitespace(c) || c == '\n')
}

/// Parse a 1-based line bound, clamping zero up to one.
pub fn parse_line_bound(digits: Option<&str>) -> Option<usize> {
    digits
        .and_then(|d| d.parse::<usize>().ok())
        .map(|n| n.max(1))
}
