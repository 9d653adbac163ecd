//! Inline `>!spoiler!<` spans.

use super::{InlineParser, Stop};
use crate::error::Error;
use crate::syntax::{Spoiler, Token};

impl InlineParser<'_, '_> {
    /// Handle `>`: a spoiler when followed by `!` and closed by `!<` on the
    /// same line, a literal `>` otherwise.
    pub(super) fn parse_inline_spoiler(&mut self, out: &mut Vec<Token>) -> Result<(), Error> {
        if !self.rest().starts_with(">!") {
            self.buffer.push('>');
            self.pos += 1;
            return Ok(());
        }

        let start = self.pos + 1;
        let link_level = self.link_level;
        let saved = self.take_buffer();
        self.pos += 2;
        let tokens = self.try_tokenize(Stop::SpoilerClose)?;
        self.buffer = saved;

        if let Some(tokens) = tokens
            && self.rest().starts_with("!<")
        {
            self.pos += 2;
            self.flush(out);
            out.push(Token::Spoiler(Spoiler {
                title: Vec::new(),
                inline: true,
                tokens,
            }));
        } else {
            self.buffer.push('>');
            self.pos = start;
            self.link_level = link_level;
        }
        Ok(())
    }
}
