//! Definition lists: paragraph lines followed by `: definition` lines.

use super::BlockParser;
use crate::error::Error;
use crate::parser::lines::Line;
use crate::syntax::{DefinitionItem, Token};
use crate::utils::{is_md_whitespace, skip_chars};

/// Whether `line` is a `: ` definition marker at `level`.
pub(crate) fn is_definition_marker(line: &Line, level: usize) -> bool {
    let content = line.trimmed();
    let mut chars = content.chars();
    line.level == level
        && chars.next() == Some(':')
        && chars.next().is_some_and(is_md_whitespace)
}

impl BlockParser<'_, '_> {
    /// Parse the definitions for `term`, starting at a marker line.
    ///
    /// Each definition takes its marker line plus every deeper line after
    /// it; blank lines between them are skipped.
    pub(super) fn parse_definitions(&mut self, term: &str) -> Result<Token, Error> {
        let term = self.inline(term)?;
        let mut definitions = Vec::new();

        while self.pos < self.lines.len() && is_definition_marker(&self.lines[self.pos], self.level) {
            let first = Line::measure(skip_chars(&self.lines[self.pos].content, 2), self.tab_width());
            self.pos += 1;

            let mut body = vec![first];
            while self.pos < self.lines.len() {
                let line = &self.lines[self.pos];
                if line.is_blank() {
                    self.pos += 1;
                    continue;
                }
                if line.level <= self.level {
                    break;
                }
                body.push(line.dedent(self.level, self.tab_width()));
                self.pos += 1;
            }
            definitions.push(self.nested(body)?);
        }

        log::debug!(
            "Parsed definition item with {} definitions ending at line {}",
            definitions.len(),
            self.pos
        );
        Ok(Token::DefinitionList {
            items: vec![DefinitionItem { term, definitions }],
        })
    }
}
