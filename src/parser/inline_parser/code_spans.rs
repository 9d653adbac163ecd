//! Inline code spans.

use super::InlineParser;
use crate::syntax::Token;

/// Try to parse a code span at the start of `text`.
///
/// The closing run must have exactly as many backticks as the opening one;
/// shorter or longer runs are part of the code. A line break before the
/// closing run means there is no span. Returns `(total_len, code)`.
pub fn try_parse_code_span(text: &str) -> Option<(usize, &str)> {
    let opening = text.bytes().take_while(|&b| b == b'`').count();
    if opening == 0 {
        return None;
    }

    let rest = &text[opening..];
    let mut pos = 0;
    while pos < rest.len() {
        match rest.as_bytes()[pos] {
            b'\n' => return None,
            b'`' => {
                let closing = rest[pos..].bytes().take_while(|&b| b == b'`').count();
                if closing == opening {
                    return Some((opening + pos + closing, &rest[..pos]));
                }
                pos += closing;
            }
            _ => pos += rest[pos..].chars().next()?.len_utf8(),
        }
    }
    None
}

impl InlineParser<'_, '_> {
    pub(super) fn parse_code_span(&mut self, out: &mut Vec<Token>) {
        if let Some((len, code)) = try_parse_code_span(self.rest()) {
            let text = code.to_string();
            self.flush(out);
            out.push(Token::CodeSpan { text });
            self.pos += len;
            return;
        }
        // Unmatched opening run stays literal
        let ticks = self.rest().bytes().take_while(|&b| b == b'`').count();
        self.buffer.push_str(&"`".repeat(ticks));
        self.pos += ticks;
    }
}
