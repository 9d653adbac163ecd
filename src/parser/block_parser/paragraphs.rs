//! Paragraphs, and the constructs that reinterpret paragraph lines:
//! underline headings and definition terms.

use super::BlockParser;
use super::definition_lists::is_definition_marker;
use super::headings::try_parse_underline;
use crate::error::Error;
use crate::syntax::Token;

impl BlockParser<'_, '_> {
    /// Accumulate paragraph lines until a blank line or another construct.
    ///
    /// A construct that interrupts the paragraph is pushed after it.
    pub(super) fn parse_paragraph(&mut self) -> Result<(), Error> {
        let mut lines: Vec<String> = Vec::new();
        let mut found = None;

        while self.pos < self.lines.len() && self.level <= self.lines[self.pos].level {
            if self.is_reference_definition(self.pos) || self.is_footnote_definition(self.pos) {
                break;
            }
            if let Some(token) = self.next_block(true)? {
                found = Some(token);
                break;
            }

            let line = &self.lines[self.pos];
            let content = line.trimmed();
            if content.is_empty() {
                self.pos += 1;
                break;
            }
            if !lines.is_empty() {
                if line.level == self.level
                    && let Some(depth) = try_parse_underline(content)
                {
                    self.pos += 1;
                    found = Some(self.underline_heading(&lines, depth)?);
                    lines.clear();
                    break;
                }
                if is_definition_marker(line, self.level) {
                    let term = lines.join("\n");
                    found = Some(self.parse_definitions(&term)?);
                    lines.clear();
                    break;
                }
            }
            lines.push(content.to_string());
            self.pos += 1;
        }

        if !lines.is_empty() {
            log::debug!("Parsed paragraph of {} lines ending at line {}", lines.len(), self.pos);
            let tokens = self.inline(&lines.join("\n"))?;
            self.push_token(Token::Paragraph {
                lines: lines.len(),
                tokens,
            });
        }
        if let Some(token) = found {
            self.push_token(token);
        }
        Ok(())
    }
}
