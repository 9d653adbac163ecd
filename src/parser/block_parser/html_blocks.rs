//! Raw HTML blocks.

use super::BlockParser;
use crate::parser::html::html_block_start;
use crate::syntax::Token;

impl BlockParser<'_, '_> {
    /// Consume an HTML block up to its category's closing condition.
    ///
    /// A closing line with content belongs to the block; a blank one does
    /// not. Without a closing line the block runs to the end of the scope.
    pub(super) fn parse_html_block(&mut self) -> Option<Token> {
        if !self.is_flush(self.pos) {
            return None;
        }
        let start = self.pos;
        let first = &self.lines[start].content;
        let pattern = html_block_start(first)?;

        let mut end = start + 1;
        if !pattern.closes(first) {
            while end < self.lines.len() {
                let line = &self.lines[end];
                if pattern.closes(&line.content) {
                    if !line.content.trim().is_empty() {
                        end += 1;
                    }
                    break;
                }
                end += 1;
            }
        }

        let content = self.lines[start..end]
            .iter()
            .map(|line| line.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        self.pos = end;
        log::debug!("Parsed HTML block at lines {}-{}", start + 1, end);
        Some(Token::Html { content })
    }
}
