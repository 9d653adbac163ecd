//! Lookahead checks used to decide where a container's content ends.
//!
//! Each check composes the same `try_parse_*` detector its consuming handler
//! uses, so a line ends a sibling container exactly when the handler would
//! accept it.

use super::BlockParser;
use super::code_blocks::try_parse_fence_open;
use super::headings::try_parse_atx_heading;
use super::horizontal_rules::try_parse_horizontal_rule;
use super::includes::{try_parse_include, try_parse_include_code};
use super::lists::{ordered_marker_len, unordered_marker};
use super::reference_definitions::{try_parse_footnote_definition, try_parse_reference_definition};
use super::tables::try_parse_table_start;
use crate::parser::html::html_block_start;

impl BlockParser<'_, '_> {
    /// Whether the line at `idx` opens a construct that ends the current
    /// container. `quote` also counts a block quote marker.
    pub(super) fn starts_sibling(&self, idx: usize, quote: bool) -> bool {
        let content = self.lines[idx].trimmed();
        ordered_marker_len(content).is_some()
            || unordered_marker(content, false).is_some()
            || self.is_fence_open(idx)
            || (quote && self.is_blockquote(idx))
            || self.is_atx_heading(idx)
            || self.is_horizontal_rule(idx)
            || self.is_table_start(idx)
            || self.is_reference_definition(idx)
            || self.is_include_code(idx)
            || self.is_include(idx)
            || self.is_html_block(idx)
            || self.is_footnote_definition(idx)
    }

    pub(super) fn is_fence_open(&self, idx: usize) -> bool {
        self.is_flush(idx) && try_parse_fence_open(self.lines[idx].trimmed()).is_some()
    }

    pub(super) fn is_blockquote(&self, idx: usize) -> bool {
        self.is_flush(idx) && self.lines[idx].content.starts_with('>')
    }

    pub(super) fn is_atx_heading(&self, idx: usize) -> bool {
        self.is_flush(idx) && try_parse_atx_heading(&self.lines[idx].content).is_some()
    }

    pub(super) fn is_horizontal_rule(&self, idx: usize) -> bool {
        self.is_flush(idx) && try_parse_horizontal_rule(self.lines[idx].trimmed(), true).is_some()
    }

    pub(super) fn is_table_start(&self, idx: usize) -> bool {
        idx + 1 < self.lines.len()
            && self.is_flush(idx)
            && self.is_flush(idx + 1)
            && try_parse_table_start(&self.lines[idx].content, &self.lines[idx + 1].content)
                .is_some()
    }

    pub(super) fn is_reference_definition(&self, idx: usize) -> bool {
        self.is_flush(idx) && try_parse_reference_definition(&self.lines[idx].content).is_some()
    }

    pub(super) fn is_footnote_definition(&self, idx: usize) -> bool {
        self.is_flush(idx) && try_parse_footnote_definition(&self.lines[idx].content).is_some()
    }

    pub(super) fn is_include(&self, idx: usize) -> bool {
        self.lexer.hooks().has_include()
            && self.is_flush(idx)
            && try_parse_include(&self.lines[idx].content).is_some()
    }

    pub(super) fn is_include_code(&self, idx: usize) -> bool {
        self.lexer.hooks().has_include_code()
            && self.is_flush(idx)
            && try_parse_include_code(&self.lines[idx].content).is_some()
    }

    pub(super) fn is_html_block(&self, idx: usize) -> bool {
        self.is_flush(idx) && html_block_start(&self.lines[idx].content).is_some()
    }
}
