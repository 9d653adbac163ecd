//! `$$` display math blocks.

use super::BlockParser;
use crate::syntax::{Tex, Token};

const DELIMITER: &str = "$$";

impl BlockParser<'_, '_> {
    /// Consume a `$$` ... `$$` block. Blank lines inside are dropped and an
    /// unclosed block runs to the end of the scope.
    pub(super) fn parse_display_math(&mut self) -> Option<Token> {
        if !self.is_flush(self.pos) || self.lines[self.pos].trimmed() != DELIMITER {
            return None;
        }
        self.pos += 1;

        let mut body = Vec::new();
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos].trimmed();
            self.pos += 1;
            if line == DELIMITER {
                break;
            }
            if !line.is_empty() {
                body.push(line.to_string());
            }
        }

        log::debug!("Parsed display math block ending at line {}", self.pos);
        Some(Token::Tex(Tex {
            text: body.join("\n").trim().to_string(),
            inline: false,
            display_mode: true,
        }))
    }
}
