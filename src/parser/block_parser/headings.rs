//! ATX and underline heading parsing.

use super::BlockParser;
use crate::error::Error;
use crate::syntax::{Heading, Token};
use crate::utils::is_md_whitespace;

/// The parts of an ATX heading line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct AtxHeading<'a> {
    pub hashes: usize,
    /// `#!` headings take part in section numbering.
    pub indexed: bool,
    pub text: &'a str,
}

/// Try to parse an ATX heading: 1-6 `#`, an optional `!`, then whitespace or
/// the end of the line.
pub(crate) fn try_parse_atx_heading(content: &str) -> Option<AtxHeading<'_>> {
    let hashes = content.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }

    let mut rest = &content[hashes..];
    let indexed = rest.starts_with('!');
    if indexed {
        rest = &rest[1..];
    }

    match rest.chars().next() {
        None => Some(AtxHeading {
            hashes,
            indexed,
            text: "",
        }),
        Some(c) if is_md_whitespace(c) => Some(AtxHeading {
            hashes,
            indexed,
            text: rest,
        }),
        _ => None,
    }
}

/// Split a trailing `{#id}` off heading text.
pub(crate) fn split_heading_id(text: &str) -> (&str, Option<&str>) {
    let text = text.trim();
    if text.len() >= 2
        && let Some(inner) = text.strip_suffix('}')
        && let Some(open) = inner.rfind("{#")
    {
        return (text[..open].trim_end(), Some(&inner[open + 2..]));
    }
    (text, None)
}

/// Depth of an underline (setext) heading: `=` gives 1, `-` gives 2.
pub(crate) fn try_parse_underline(content: &str) -> Option<usize> {
    let first = content.chars().next()?;
    if !matches!(first, '=' | '-') || !content.chars().all(|c| c == first) {
        return None;
    }
    Some(if first == '=' { 1 } else { 2 })
}

impl BlockParser<'_, '_> {
    pub(super) fn parse_atx_heading(&mut self) -> Result<Option<Token>, Error> {
        if !self.is_flush(self.pos) {
            return Ok(None);
        }
        let Some(atx) = try_parse_atx_heading(&self.lines[self.pos].content) else {
            return Ok(None);
        };
        let (text, explicit_id) = split_heading_id(atx.text);
        let (text, explicit_id) = (text.to_string(), explicit_id.map(str::to_string));
        let (hashes, indexed) = (atx.hashes, atx.indexed);
        self.pos += 1;

        let depth = self.lexer.shifted_depth(hashes);
        let heading_index = if indexed {
            self.lexer.new_heading(depth)
        } else {
            String::new()
        };
        let id = match explicit_id {
            Some(id) => Some(id),
            None if text.is_empty() => None,
            None => Some(self.lexer.slugger.slug(&text)),
        };
        log::debug!(
            "Parsed ATX heading at line {}: depth {}, id {:?}",
            self.pos,
            depth,
            id
        );

        Ok(Some(Token::Heading(Heading {
            id,
            is_underline: false,
            heading_index,
            depth,
            tokens: self.inline(&text)?,
        })))
    }

    /// Build the heading for paragraph `lines` closed by an underline of
    /// the given depth.
    pub(super) fn underline_heading(
        &mut self,
        lines: &[String],
        depth: usize,
    ) -> Result<Token, Error> {
        let text = lines.join(" ");
        let depth = self.lexer.shifted_depth(depth);
        let id = self.lexer.slugger.slug(&text);
        log::debug!("Parsed underline heading at line {}: depth {}", self.pos + 1, depth);
        Ok(Token::Heading(Heading {
            id: Some(id),
            is_underline: true,
            heading_index: String::new(),
            depth,
            tokens: self.inline(&text)?,
        }))
    }
}
