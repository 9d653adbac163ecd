//! Link reference and footnote definitions.
//!
//! Both only fill the lexer's side tables; the first definition of a label
//! wins and later ones are consumed silently.

use std::sync::LazyLock;

use regex::Regex;

use super::BlockParser;
use crate::error::Error;
use crate::parser::lines::Line;
use crate::syntax::LinkRef;

static REFERENCE_DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\[([^\]]+)\]:\s+(?:<(\S+)>|(\S+))(?:\s+(?:"([^"]+)"|'([^']+)'|\(([^)]+)\)))?$"#,
    )
    .expect("reference definition regex should compile")
});

static FOOTNOTE_DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[\^([^\]]+)\]:\s+(.+)").expect("footnote definition regex should compile")
});

/// `[label]: destination "title"`, returning the label and its target.
pub(crate) fn try_parse_reference_definition(content: &str) -> Option<(&str, LinkRef)> {
    let caps = REFERENCE_DEFINITION.captures(content)?;
    let label = caps.get(1)?.as_str();
    let link = caps.get(2).or_else(|| caps.get(3))?.as_str().to_string();
    let title = (4..=6)
        .find_map(|i| caps.get(i))
        .map(|m| m.as_str().to_string());
    Some((label, LinkRef { link, title }))
}

/// `[^label]: body`, returning the label and the first line of the body.
pub(crate) fn try_parse_footnote_definition(content: &str) -> Option<(&str, &str)> {
    let caps = FOOTNOTE_DEFINITION.captures(content)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

impl BlockParser<'_, '_> {
    pub(super) fn parse_reference_definition(&mut self) -> bool {
        if !self.is_flush(self.pos) {
            return false;
        }
        let Some((label, target)) = try_parse_reference_definition(&self.lines[self.pos].content)
        else {
            return false;
        };
        if !self.lexer.reflinks.contains_key(label) {
            log::debug!("Reference [{}] -> {}", label, target.link);
            self.lexer.reflinks.insert(label.to_string(), target);
        }
        self.pos += 1;
        true
    }

    pub(super) fn parse_footnote_definition(&mut self) -> Result<bool, Error> {
        if !self.is_flush(self.pos) {
            return Ok(false);
        }
        let Some((label, first)) = try_parse_footnote_definition(&self.lines[self.pos].content)
        else {
            return Ok(false);
        };
        let label = label.to_string();
        let first = Line::measure(first, self.tab_width());
        self.pos += 1;

        let body = self.collect_container_body(first);
        if self.lexer.footnote_defs.contains_key(&label) {
            log::debug!("Ignoring duplicate footnote definition [^{}]", label);
            return Ok(true);
        }
        let tokens = self.nested(body)?;
        log::debug!("Footnote [^{}] defined with {} blocks", label, tokens.len());
        self.lexer.footnote_defs.insert(label, tokens);
        Ok(true)
    }
}
