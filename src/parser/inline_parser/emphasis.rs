//! `*italic*`, `**bold**`, `_italic_`, `__underline__` and the triple forms
//! that nest both.

use super::{InlineParser, Stop};
use crate::error::Error;
use crate::syntax::Token;

/// The double-delimiter form for `symbol`.
fn strong(symbol: char, tokens: Vec<Token>) -> Token {
    if symbol == '_' {
        Token::Underline { tokens }
    } else {
        Token::Bold { tokens }
    }
}

impl InlineParser<'_, '_> {
    /// Consume exactly `count` closing `symbol`s, if present.
    fn close_run(&mut self, symbol: char, count: usize) -> bool {
        if self.count_run(symbol, count) == count {
            self.pos += count;
            true
        } else {
            false
        }
    }

    /// `***a***`, `***a* b**` and `***a** b*`.
    fn triple_emphasis(&mut self, symbol: char) -> Result<Option<Token>, Error> {
        let Some(inner) = self.try_tokenize(Stop::Symbol(symbol))? else {
            return Ok(None);
        };
        let closing = self.count_run(symbol, 3);
        self.pos += closing;

        let token = match closing {
            3 => Some(strong(symbol, vec![Token::Italic { tokens: inner }])),
            1 => {
                let Some(rest) = self.try_tokenize(Stop::Double(symbol))? else {
                    return Ok(None);
                };
                let mut tokens = vec![Token::Italic { tokens: inner }];
                tokens.extend(rest);
                self.close_run(symbol, 2).then(|| strong(symbol, tokens))
            }
            2 => {
                let Some(rest) = self.try_tokenize(Stop::Single(symbol))? else {
                    return Ok(None);
                };
                let mut tokens = vec![strong(symbol, inner)];
                tokens.extend(rest);
                self.close_run(symbol, 1)
                    .then_some(Token::Italic { tokens })
            }
            _ => None,
        };
        Ok(token)
    }

    pub(super) fn parse_emphasis(&mut self, out: &mut Vec<Token>) -> Result<(), Error> {
        let Some(symbol) = self.peek() else {
            return Ok(());
        };
        let start = self.pos + 1;
        let link_level = self.link_level;
        let saved = self.take_buffer();
        let count = self.count_run(symbol, 3);
        self.pos += count;

        let token = match count {
            3 => self.triple_emphasis(symbol)?,
            2 => match self.try_tokenize(Stop::Double(symbol))? {
                Some(tokens) => self.close_run(symbol, 2).then(|| strong(symbol, tokens)),
                None => None,
            },
            _ => match self.try_tokenize(Stop::Single(symbol))? {
                Some(tokens) => self
                    .close_run(symbol, 1)
                    .then_some(Token::Italic { tokens }),
                None => None,
            },
        };

        self.buffer = saved;
        match token {
            Some(token) => {
                self.flush(out);
                out.push(token);
            }
            None => {
                // Unclosed: the first delimiter is text, rescan after it
                self.buffer.push(symbol);
                self.pos = start;
                self.link_level = link_level;
            }
        }
        Ok(())
    }
}
