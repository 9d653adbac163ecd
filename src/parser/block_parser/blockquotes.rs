//! Block quote parsing.

use super::BlockParser;
use super::code_blocks::try_parse_fence_open;
use super::lists::{ordered_marker_len, unordered_marker};
use crate::error::Error;
use crate::parser::lines::Line;
use crate::syntax::Token;
use crate::utils::{is_md_whitespace, skip_chars};

/// Strip one `>` marker and the whitespace character after it.
pub(crate) fn strip_quote_marker(content: &str) -> &str {
    let Some(rest) = content.strip_prefix('>') else {
        return content;
    };
    match rest.chars().next() {
        Some(c) if is_md_whitespace(c) => skip_chars(rest, 1),
        _ => rest,
    }
}

/// Length of the text left once every leading `>` is removed.
fn quote_length(content: &str) -> usize {
    content.trim_start_matches('>').trim().len()
}

impl BlockParser<'_, '_> {
    pub(super) fn parse_blockquote(&mut self) -> Result<Option<Token>, Error> {
        if !self.is_blockquote(self.pos) {
            return Ok(None);
        }
        let start = self.pos;
        let first_level = self.lines[start].level;
        let mut quoted: Vec<Line> = Vec::new();
        // Set when the last quoted line cannot take a lazy continuation.
        let mut closed = false;

        while self.pos < self.lines.len() {
            let line = &self.lines[self.pos];
            let content = line.trimmed();
            if content.is_empty() {
                self.pos += 1;
                break;
            }
            if self.starts_sibling(self.pos, false) {
                break;
            }

            if content.starts_with('>') {
                if line.level > first_level {
                    break;
                }
                let inner = Line::measure(strip_quote_marker(content), self.tab_width());
                closed = inner.level > 0
                    || ordered_marker_len(&inner.content).is_some()
                    || unordered_marker(&inner.content, false).is_some()
                    || try_parse_fence_open(&inner.content).is_some()
                    || quote_length(&inner.content) == 0;
                quoted.push(inner);
            } else if closed {
                break;
            } else if let Some(last) = quoted.last_mut() {
                last.content.push('\n');
                last.content.push_str(&line.content);
            }
            self.pos += 1;
        }

        if quoted.is_empty() {
            self.pos = start;
            return Ok(None);
        }
        log::debug!(
            "Parsed block quote of {} lines ending at line {}",
            quoted.len(),
            self.pos
        );
        let tokens = self.nested(quoted)?;
        Ok(Some(Token::BlockQuote { tokens }))
    }
}
