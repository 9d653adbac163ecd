//! Fenced and indented code blocks.

use super::BlockParser;
use crate::syntax::{CodeBlock, Token};

/// Backtick count of an opening fence.
///
/// At least three backticks, and the info string after them may not contain
/// another backtick.
pub(crate) fn try_parse_fence_open(line: &str) -> Option<usize> {
    let ticks = line.bytes().take_while(|&b| b == b'`').count();
    if ticks < 3 || line[ticks..].contains('`') {
        return None;
    }
    Some(ticks)
}

/// Backtick count of a closing fence: a line of nothing but backticks.
pub(crate) fn try_parse_fence_close(line: &str) -> Option<usize> {
    let ticks = line.bytes().take_while(|&b| b == b'`').count();
    if ticks < 3 || ticks != line.len() {
        return None;
    }
    Some(ticks)
}

impl BlockParser<'_, '_> {
    pub(super) fn parse_fenced_code(&mut self) -> Option<Token> {
        if !self.is_flush(self.pos) {
            return None;
        }
        let open_line = &self.lines[self.pos];
        let opening = open_line.trimmed();
        let fence = try_parse_fence_open(opening)?;
        let info = opening[fence..].trim();
        let lang = (!info.is_empty()).then(|| info.to_string());
        let remove = open_line.level * self.tab_width();

        let start = self.pos + 1;
        let mut end = self.lines.len();
        let mut closed = false;
        for idx in start..self.lines.len() {
            if try_parse_fence_close(self.lines[idx].trimmed()).is_some_and(|n| n >= fence) {
                end = idx;
                closed = true;
                break;
            }
        }

        let content = self.lines[start..end]
            .iter()
            .map(|line| line.code_text(remove))
            .collect::<Vec<_>>()
            .join("\n");
        self.pos = if closed { end + 1 } else { end };
        log::debug!(
            "Parsed fenced code block ending at line {} (lang {:?}, closed: {})",
            self.pos,
            lang,
            closed
        );

        Some(Token::CodeBlock(CodeBlock {
            lang,
            from: None,
            to: None,
            content,
        }))
    }

    pub(super) fn parse_indented_code(&mut self) -> Option<Token> {
        if self.is_flush(self.pos) {
            return None;
        }
        let remove = (self.level + 1) * self.tab_width();
        let mut code = Vec::new();
        while self.pos < self.lines.len() && self.lines[self.pos].level > self.level {
            code.push(self.lines[self.pos].code_text(remove));
            self.pos += 1;
        }
        log::debug!("Parsed indented code block ending at line {}", self.pos);
        Some(Token::CodeBlock(CodeBlock {
            lang: None,
            from: None,
            to: None,
            content: code.join("\n"),
        }))
    }
}
