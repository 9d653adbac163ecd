//! Line-based block tokenizer.
//!
//! A [`BlockParser`] walks a sequence of [`Line`]s and hands each block
//! construct to its handler. Containers (list items, quotes, spoilers,
//! footnote and definition bodies) collect their own lines and tokenize them
//! with a fresh `BlockParser` sharing the same [`Lexer`].

use crate::error::Error;
use crate::parser::Lexer;
use crate::parser::lines::Line;
use crate::syntax::Token;

mod blockquotes;
mod code_blocks;
mod definition_lists;
mod display_math;
mod headings;
mod horizontal_rules;
mod html_blocks;
mod includes;
mod lists;
mod metadata;
mod paragraphs;
mod predicates;
mod reference_definitions;
mod spoilers;
mod tables;

pub struct BlockParser<'a, 'h> {
    lexer: &'a mut Lexer<'h>,
    lines: Vec<Line>,
    /// Indentation level owned by this parser; deeper lines belong to
    /// nested constructs.
    level: usize,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a, 'h> BlockParser<'a, 'h> {
    pub fn new(lexer: &'a mut Lexer<'h>, lines: Vec<Line>) -> Self {
        Self {
            lexer,
            lines,
            level: 0,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize every line, returning the block tokens in document order.
    pub fn parse(mut self) -> Result<Vec<Token>, Error> {
        self.lexer.descend()?;
        let result = self.parse_blocks();
        self.lexer.ascend();
        result?;
        Ok(self.tokens)
    }

    fn parse_blocks(&mut self) -> Result<(), Error> {
        log::trace!("Block scope with {} lines", self.lines.len());
        while self.pos < self.lines.len() && self.level <= self.lines[self.pos].level {
            let start = self.pos;

            if self.parse_footnote_definition()? || self.parse_reference_definition() {
                // Definitions only feed the side tables
            } else if let Some(token) = self.next_block(false)? {
                self.push_token(token);
            } else {
                self.parse_paragraph()?;
            }

            if self.pos == start {
                log::warn!(
                    "No block consumed line {}, skipping: {:?}",
                    start + 1,
                    self.lines[start].content
                );
                self.pos += 1;
            }
        }
        Ok(())
    }

    /// Try every block construct at the cursor in precedence order.
    ///
    /// `in_paragraph` is set while a paragraph is being continued: a bare
    /// list marker, a `-` rule and indented code cannot interrupt it.
    fn next_block(&mut self, in_paragraph: bool) -> Result<Option<Token>, Error> {
        if let Some(token) = self.parse_atx_heading()? {
            return Ok(Some(token));
        }
        if let Some(token) = self.parse_blockquote()? {
            return Ok(Some(token));
        }
        if let Some(token) = self.parse_ordered_list()? {
            return Ok(Some(token));
        }
        if let Some(token) = self.parse_display_math() {
            return Ok(Some(token));
        }
        if let Some(token) = self.parse_unordered_list(in_paragraph)? {
            return Ok(Some(token));
        }
        if let Some(token) = self.parse_fenced_code() {
            return Ok(Some(token));
        }
        if let Some(token) = self.parse_table()? {
            return Ok(Some(token));
        }
        if let Some(token) = self.parse_spoiler()? {
            return Ok(Some(token));
        }
        if let Some(token) = self.parse_include()? {
            return Ok(Some(token));
        }
        if let Some(token) = self.parse_include_code() {
            return Ok(Some(token));
        }
        if let Some(token) = self.parse_html_block() {
            return Ok(Some(token));
        }
        if let Some(token) = self.parse_horizontal_rule(!in_paragraph) {
            return Ok(Some(token));
        }
        if !in_paragraph && let Some(token) = self.parse_indented_code() {
            return Ok(Some(token));
        }
        Ok(None)
    }

    /// Append a token, folding consecutive definition lists together.
    fn push_token(&mut self, token: Token) {
        match token {
            Token::DefinitionList { items } => match self.tokens.last_mut() {
                Some(Token::DefinitionList { items: existing }) => existing.extend(items),
                _ => self.tokens.push(Token::DefinitionList { items }),
            },
            token => self.tokens.push(token),
        }
    }

    /// Whether the line at `idx` is not indented past this parser's level.
    fn is_flush(&self, idx: usize) -> bool {
        self.lines[idx].level <= self.level
    }

    fn tab_width(&self) -> usize {
        self.lexer.tab_width
    }

    /// Tokenize `lines` as a nested block scope.
    fn nested(&mut self, lines: Vec<Line>) -> Result<Vec<Token>, Error> {
        BlockParser::new(&mut *self.lexer, lines).parse()
    }

    fn inline(&mut self, text: &str) -> Result<Vec<Token>, Error> {
        self.lexer.inline_lex(text)
    }

    /// Collect the continuation lines of a list item or footnote body.
    ///
    /// Deeper lines and single blank lines always belong to the body; a line
    /// at this level continues it only when it follows non-blank content and
    /// does not start a sibling construct. A second consecutive blank line
    /// ends the body without being consumed.
    fn collect_container_body(&mut self, first: Line) -> Vec<Line> {
        let mut body = vec![first];
        let mut previous_blank = false;
        while self.pos < self.lines.len() {
            let line = &self.lines[self.pos];
            let blank = line.is_blank();
            if previous_blank && blank {
                break;
            }
            let continues = line.level > self.level
                || blank
                || (line.level == self.level
                    && !previous_blank
                    && !self.starts_sibling(self.pos, true));
            if !continues {
                break;
            }
            body.push(line.dedent(self.level, self.tab_width()));
            previous_blank = blank;
            self.pos += 1;
        }
        body
    }
}
