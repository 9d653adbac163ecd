//! Parser module containing the block and inline tokenizers.
//!
//! All mutable state of one document parse lives in [`Lexer`], which is lent
//! to every block and inline tokenizer spawned for that document.

use std::collections::{BTreeMap, HashSet};

use crate::config::{Config, EmojiRecord};
use crate::error::Error;
use crate::hooks::Hooks;
use crate::syntax::{Document, LinkRef, Token};

pub mod block_parser;
pub mod html;
pub mod inline_parser;
pub mod lines;
pub mod slugger;

pub use block_parser::BlockParser;
pub use inline_parser::{InlineParser, Stop};
pub use lines::{Line, segment};
use slugger::Slugger;

/// Per-document tokenizer context.
pub struct Lexer<'h> {
    pub(crate) tab_width: usize,
    max_nesting: usize,
    depth: usize,
    hooks: &'h Hooks,
    builtin_emojis: bool,
    heading_index: [usize; 6],
    pub(crate) heading_shift: i32,
    /// Set once front matter had its chance at the top of a document.
    pub(crate) started: bool,
    pub(crate) metadata: BTreeMap<String, String>,
    pub(crate) emojis: BTreeMap<String, EmojiRecord>,
    pub(crate) reflinks: BTreeMap<String, LinkRef>,
    pub(crate) footnote_defs: BTreeMap<String, Vec<Token>>,
    pub(crate) footnote_index: BTreeMap<String, usize>,
    pub(crate) footnote_refs: BTreeMap<usize, String>,
    /// Include locations currently being expanded.
    pub(crate) included: HashSet<String>,
    pub(crate) slugger: Slugger,
}

impl<'h> Lexer<'h> {
    pub fn new(config: &Config, hooks: &'h Hooks) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            tab_width: config.tab_width,
            max_nesting: config.max_nesting,
            depth: 0,
            hooks,
            builtin_emojis: config.builtin_emojis,
            heading_index: [0; 6],
            heading_shift: 0,
            started: false,
            metadata: config.metadata.clone(),
            emojis: config.emojis.clone(),
            reflinks: BTreeMap::new(),
            footnote_defs: BTreeMap::new(),
            footnote_index: BTreeMap::new(),
            footnote_refs: BTreeMap::new(),
            included: HashSet::new(),
            slugger: Slugger::new(),
        })
    }

    pub(crate) fn hooks(&self) -> &'h Hooks {
        self.hooks
    }

    /// Advance the section counter for a heading of `depth` (1-6).
    ///
    /// Deeper counters reset; the result is the dotted path, e.g. `1.2.`.
    pub fn new_heading(&mut self, depth: usize) -> String {
        let depth = depth.clamp(1, 6);
        self.heading_index[depth - 1] += 1;
        for counter in &mut self.heading_index[depth..] {
            *counter = 0;
        }
        self.heading_index[..depth]
            .iter()
            .map(|n| format!("{}.", n))
            .collect()
    }

    /// Heading depth after applying the include shift, clamped to 1-6.
    pub(crate) fn shifted_depth(&self, depth: usize) -> usize {
        (depth as i32 + self.heading_shift).clamp(1, 6) as usize
    }

    /// Record a footnote reference, numbering labels in first-use order.
    pub(crate) fn register_footnote(&mut self, label: &str) {
        if self.footnote_index.contains_key(label) {
            return;
        }
        let index = self.footnote_index.len() + 1;
        log::trace!("Footnote [^{}] assigned index {}", label, index);
        self.footnote_index.insert(label.to_string(), index);
        self.footnote_refs.insert(index, label.to_string());
    }

    pub(crate) fn has_emoji(&self, name: &str) -> bool {
        self.emojis.contains_key(name)
            || (self.builtin_emojis && emojis::get_by_shortcode(name).is_some())
    }

    /// Enter one nested scope, failing once the nesting limit is passed.
    pub(crate) fn descend(&mut self) -> Result<(), Error> {
        if self.depth >= self.max_nesting {
            log::warn!("Nesting limit of {} reached", self.max_nesting);
            return Err(Error::NestingLimit {
                limit: self.max_nesting,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Fully parse `content` as a document sharing this context.
    ///
    /// Front matter is honored when `started` is still unset.
    pub fn lex(&mut self, content: &str) -> Result<Vec<Token>, Error> {
        let lines = segment(content, self.tab_width);
        let mut parser = BlockParser::new(self, lines);
        parser.front_matter();
        parser.parse()
    }

    /// Tokenize one block's text as inline content.
    pub fn inline_lex(&mut self, content: &str) -> Result<Vec<Token>, Error> {
        InlineParser::new(self, content, 0).parse()
    }

    /// Hand the accumulated side tables to a [`Document`].
    pub fn into_document(self, tokens: Vec<Token>) -> Document {
        Document {
            metadata: self.metadata,
            reflinks: self.reflinks,
            footnote_defs: self.footnote_defs,
            footnote_index_refs: self.footnote_index,
            footnote_refs: self.footnote_refs,
            emojis: self.emojis,
            tokens,
        }
    }
}

/// Parse `input` into a [`Document`].
///
/// A footnote section marker is appended when footnotes were both defined and
/// referenced.
pub fn parse_document(input: &str, config: &Config, hooks: &Hooks) -> Result<Document, Error> {
    let mut lexer = Lexer::new(config, hooks)?;
    let mut tokens = lexer.lex(input)?;
    if !lexer.footnote_defs.is_empty() && !lexer.footnote_index.is_empty() {
        tokens.push(Token::FootnoteEnd);
    }
    log::debug!(
        "Parsed {} top-level tokens, {} reference links, {} footnotes",
        tokens.len(),
        lexer.reflinks.len(),
        lexer.footnote_defs.len()
    );
    Ok(lexer.into_document(tokens))
}
