//! Paired double-character marks: `==highlight==`, `~~strikethrough~~`,
//! `||spoiler||` and `^^overline^^`.

use super::{InlineParser, Stop};
use crate::error::Error;
use crate::syntax::{Spoiler, Token};

/// Wrap `tokens` in the construct that `mark` delimits.
fn mark_token(mark: char, tokens: Vec<Token>) -> Token {
    match mark {
        '=' => Token::Highlight { tokens },
        '~' => Token::Strikethrough { tokens },
        '|' => Token::Spoiler(Spoiler {
            title: Vec::new(),
            inline: true,
            tokens,
        }),
        _ => Token::Overline { tokens },
    }
}

impl InlineParser<'_, '_> {
    pub(super) fn parse_mark(&mut self, out: &mut Vec<Token>) -> Result<(), Error> {
        let Some(mark) = self.peek() else {
            return Ok(());
        };
        let start = self.pos + 1;
        if self.count_run(mark, 2) < 2 {
            self.buffer.push(mark);
            self.pos = start;
            return Ok(());
        }

        let link_level = self.link_level;
        let saved = self.take_buffer();
        self.pos += 2;
        let tokens = self.try_tokenize(Stop::Double(mark))?;
        self.buffer = saved;

        if let Some(tokens) = tokens
            && self.count_run(mark, 2) == 2
        {
            self.pos += 2;
            self.flush(out);
            out.push(mark_token(mark, tokens));
        } else {
            self.buffer.push(mark);
            self.pos = start;
            self.link_level = link_level;
        }
        Ok(())
    }
}
