//! `$...$` and `$$...$$` math spans.

use super::InlineParser;
use super::escapes::escape_len;
use crate::syntax::{Tex, Token};

/// Scan `text` from `start` for `close`, stepping over escapes.
fn find_close(text: &str, start: usize, close: &str) -> Option<usize> {
    let mut pos = start;
    while pos < text.len() {
        let rest = &text[pos..];
        if let Some(len) = escape_len(rest) {
            pos += len;
            continue;
        }
        if rest.starts_with(close) {
            return Some(pos);
        }
        pos += rest.chars().next()?.len_utf8();
    }
    None
}

/// Try to parse `$$math$$`. Returns `(total_len, math)`.
pub fn try_parse_display_math(text: &str) -> Option<(usize, &str)> {
    if !text.starts_with("$$") {
        return None;
    }
    let end = find_close(text, 2, "$$")?;
    Some((end + 2, &text[2..end]))
}

/// Try to parse `$math$`; the span may cross line breaks.
pub fn try_parse_inline_math(text: &str) -> Option<(usize, &str)> {
    if !text.starts_with('$') {
        return None;
    }
    let end = find_close(text, 1, "$")?;
    Some((end + 1, &text[1..end]))
}

impl InlineParser<'_, '_> {
    pub(super) fn parse_math(&mut self, out: &mut Vec<Token>) {
        let (parsed, display_mode) = match try_parse_display_math(self.rest()) {
            Some(found) => (Some(found), true),
            None if self.rest().starts_with("$$") => (None, true),
            None => (try_parse_inline_math(self.rest()), false),
        };
        match parsed {
            Some((len, math)) => {
                let text = math.to_string();
                self.flush(out);
                out.push(Token::Tex(Tex {
                    text,
                    inline: true,
                    display_mode,
                }));
                self.pos += len;
            }
            None => {
                // An unclosed `$$` leaves its second `$` to be tried again
                self.buffer.push('$');
                self.pos += 1;
            }
        }
    }
}
