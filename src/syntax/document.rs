//! The document root handed from the parser to the renderer.

use std::collections::BTreeMap;

use serde::Serialize;

use super::tokens::Token;
use crate::config::EmojiRecord;

/// Target of a `[label]: url "title"` definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRef {
    pub link: String,
    pub title: Option<String>,
}

/// A fully parsed document plus the side tables collected while parsing.
///
/// Reference links, footnotes and metadata may be used before they are
/// defined, so they live here instead of inside the tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub metadata: BTreeMap<String, String>,
    pub reflinks: BTreeMap<String, LinkRef>,
    pub footnote_defs: BTreeMap<String, Vec<Token>>,
    /// Footnote label to its 1-based index, in first-use order.
    pub footnote_index_refs: BTreeMap<String, usize>,
    /// Inverse of `footnote_index_refs`.
    pub footnote_refs: BTreeMap<usize, String>,
    pub emojis: BTreeMap<String, EmojiRecord>,
    pub tokens: Vec<Token>,
}

impl Document {
    /// Index assigned to a referenced footnote label.
    pub fn footnote_index(&self, label: &str) -> Option<usize> {
        self.footnote_index_refs.get(label).copied()
    }
}
