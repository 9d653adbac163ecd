//! Ordered, unordered and task lists.

use super::BlockParser;
use crate::error::Error;
use crate::parser::lines::Line;
use crate::syntax::{List, ListItem, Token};
use crate::utils::{is_md_whitespace, skip_chars};

/// Byte length of an ordered list marker (`12.` plus one whitespace
/// character), if `content` starts with one.
pub(crate) fn ordered_marker_len(content: &str) -> Option<usize> {
    let digits = content.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = content[digits..].strip_prefix('.')?;
    let ws = rest.chars().next()?;
    is_md_whitespace(ws).then(|| digits + 1 + ws.len_utf8())
}

/// Bullet of an unordered list item: `*`, `+` or `-` followed by whitespace.
///
/// A bare bullet on its own also counts unless `in_paragraph` is set.
pub(crate) fn unordered_marker(content: &str, in_paragraph: bool) -> Option<char> {
    let mut chars = content.chars();
    let bullet = chars.next()?;
    if !matches!(bullet, '*' | '+' | '-') {
        return None;
    }
    match chars.next() {
        None if !in_paragraph => Some(bullet),
        Some(c) if is_md_whitespace(c) => Some(bullet),
        _ => None,
    }
}

/// Task checkbox state of a `-` item's text, with the remaining text.
///
/// Returns `(task, checked, text)`.
pub(crate) fn try_parse_task(text: &str, bullet: char) -> (bool, bool, &str) {
    if bullet != '-' {
        return (false, false, text);
    }
    let mut chars = text.chars();
    let (Some('['), Some(mark), Some(']')) = (chars.next(), chars.next(), chars.next()) else {
        return (false, false, text);
    };
    let checked = mark.eq_ignore_ascii_case(&'x');
    let rest = chars.as_str();
    match rest.chars().next() {
        None => (true, checked, ""),
        Some(c) if is_md_whitespace(c) => (true, checked, rest.trim_start()),
        _ => (false, false, text),
    }
}

/// Index of the first blank line in `body` that is followed by more
/// content; items with such a gap after their first paragraph are loose.
fn first_gap(body: &[Line]) -> Option<usize> {
    let blank = body.iter().position(Line::is_blank)?;
    body[blank..]
        .iter()
        .any(|line| !line.is_blank())
        .then_some(blank)
}

impl BlockParser<'_, '_> {
    pub(super) fn parse_ordered_list(&mut self) -> Result<Option<Token>, Error> {
        if !self.is_flush(self.pos) {
            return Ok(None);
        }
        let first = &self.lines[self.pos].content;
        let digits = first.bytes().take_while(u8::is_ascii_digit).count();
        let start_at = (digits > 0).then(|| first[..digits].to_string());

        let mut items = Vec::new();
        while self.pos < self.lines.len() {
            let content = self.lines[self.pos].trimmed();
            let Some(marker) = ordered_marker_len(content) else {
                break;
            };
            let line = Line::measure(&content[marker..], self.tab_width());
            self.pos += 1;
            let tokens = self.list_item_body(line)?;
            items.push(ListItem {
                task: false,
                checked: false,
                tokens,
            });
        }

        if items.is_empty() {
            return Ok(None);
        }
        log::debug!(
            "Parsed ordered list of {} items ending at line {}",
            items.len(),
            self.pos
        );
        Ok(Some(Token::List(List {
            start_at,
            ordered: true,
            items,
        })))
    }

    pub(super) fn parse_unordered_list(
        &mut self,
        in_paragraph: bool,
    ) -> Result<Option<Token>, Error> {
        if !self.is_flush(self.pos) {
            return Ok(None);
        }
        let Some(bullet) = unordered_marker(self.lines[self.pos].trimmed(), in_paragraph) else {
            return Ok(None);
        };

        let mut items = Vec::new();
        while self.pos < self.lines.len() {
            let content = self.lines[self.pos].trimmed();
            if unordered_marker(content, in_paragraph) != Some(bullet) {
                break;
            }
            let item = Line::measure(skip_chars(content, 2), self.tab_width());
            let (task, checked, text) = try_parse_task(&item.content, bullet);
            let text = text.to_string();
            let line = Line {
                content: text,
                ..item
            };
            self.pos += 1;
            let tokens = self.list_item_body(line)?;
            items.push(ListItem {
                task,
                checked,
                tokens,
            });
        }

        log::debug!(
            "Parsed unordered list ({}) of {} items ending at line {}",
            bullet,
            items.len(),
            self.pos
        );
        Ok(Some(Token::List(List {
            start_at: None,
            ordered: false,
            items,
        })))
    }

    /// Collect and tokenize one item's body.
    ///
    /// A leading paragraph is unwrapped into the item unless a blank line
    /// separates it from further content.
    fn list_item_body(&mut self, first: Line) -> Result<Vec<Token>, Error> {
        let body = self.collect_container_body(first);
        let gap = first_gap(&body);
        let mut tokens = self.nested(body)?;

        let tight = match tokens.first() {
            Some(Token::Paragraph { lines, .. }) => gap != Some(*lines),
            _ => false,
        };
        if tight && let Token::Paragraph { tokens: inline, .. } = tokens.remove(0) {
            tokens.splice(0..0, inline);
        }
        Ok(tokens)
    }
}
