//! `!>` spoiler blocks, closed by a `<!` line.

use super::BlockParser;
use crate::error::Error;
use crate::syntax::{Spoiler, Token};

/// Title of a spoiler opening line.
pub(crate) fn try_parse_spoiler_open(line: &str) -> Option<&str> {
    line.strip_prefix("!>").map(str::trim_start)
}

impl BlockParser<'_, '_> {
    pub(super) fn parse_spoiler(&mut self) -> Result<Option<Token>, Error> {
        if !self.is_flush(self.pos) {
            return Ok(None);
        }
        let Some(title) = try_parse_spoiler_open(self.lines[self.pos].trimmed()) else {
            return Ok(None);
        };
        let title = title.to_string();
        let start = self.pos + 1;
        let end = (start..self.lines.len())
            .find(|&idx| self.lines[idx].trimmed() == "<!")
            .unwrap_or(self.lines.len());
        let body = self.lines[start..end].to_vec();
        // Past the closing line, if there is one
        self.pos = (end + 1).min(self.lines.len());

        log::debug!("Parsed spoiler block at lines {}-{}", start, end + 1);
        let title = self.inline(&title)?;
        let tokens = self.nested(body)?;
        Ok(Some(Token::Spoiler(Spoiler {
            title,
            inline: false,
            tokens,
        })))
    }
}
