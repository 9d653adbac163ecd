//! `!INCLUDE` and `!INCLUDECODE` directives.
//!
//! Both are only recognized when the matching hook is installed. Included
//! documents are parsed with the same lexer, so headings, references and
//! footnotes stay document-wide.

use std::sync::LazyLock;

use regex::Regex;

use super::BlockParser;
use crate::error::Error;
use crate::syntax::{CodeBlock, Token};
use crate::utils::parse_line_bound;

static INCLUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^!INCLUDE\s+(?:['"](.+?)['"]|\((.+?)\))(?:,\s*(?:l\s*(?:(\d+)?(?::(\d+))?)?)?(?:\s*s\s*(-?\d+))?)?\s*$"#,
    )
    .expect("include regex should compile")
});

static INCLUDE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^!INCLUDECODE\s+(?:["'](.+?)["']|\((.+?)\))(?:\s*\((\w+)\))?(?:\s*,\s*(?:(\d+)?(?::(\d+))?))?\s*$"#,
    )
    .expect("include code regex should compile")
});

/// Most levels an include may shift its headings by.
const MAX_HEADING_SHIFT: i32 = 6;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Include<'a> {
    pub location: &'a str,
    pub from: Option<usize>,
    pub to: Option<usize>,
    pub heading_shift: i32,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct IncludeCode<'a> {
    pub location: &'a str,
    pub lang: Option<&'a str>,
    pub from: Option<usize>,
    pub to: Option<usize>,
}

/// `!INCLUDE "path", l 3:10 s 1`: location, optional line range and
/// heading shift.
pub(crate) fn try_parse_include(content: &str) -> Option<Include<'_>> {
    let caps = INCLUDE.captures(content)?;
    let location = caps.get(1).or_else(|| caps.get(2))?.as_str();
    let heading_shift = caps
        .get(5)
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .unwrap_or(0);
    Some(Include {
        location,
        from: parse_line_bound(caps.get(3).map(|m| m.as_str())),
        to: parse_line_bound(caps.get(4).map(|m| m.as_str())),
        heading_shift,
    })
}

/// `!INCLUDECODE "path" (lang), 3:10`.
pub(crate) fn try_parse_include_code(content: &str) -> Option<IncludeCode<'_>> {
    let caps = INCLUDE_CODE.captures(content)?;
    let location = caps.get(1).or_else(|| caps.get(2))?.as_str();
    Some(IncludeCode {
        location,
        lang: caps.get(3).map(|m| m.as_str()),
        from: parse_line_bound(caps.get(4).map(|m| m.as_str())),
        to: parse_line_bound(caps.get(5).map(|m| m.as_str())),
    })
}

impl BlockParser<'_, '_> {
    pub(super) fn parse_include(&mut self) -> Result<Option<Token>, Error> {
        if !self.is_include(self.pos) {
            return Ok(None);
        }
        let Some(include) = try_parse_include(&self.lines[self.pos].content) else {
            return Ok(None);
        };
        let location = include.location.to_string();
        let (from, to, shift) = (include.from, include.to, include.heading_shift);
        self.pos += 1;

        let hooks = self.lexer.hooks();
        let key = hooks.resolve(&location);
        if self.lexer.included.contains(&key) {
            log::warn!("Include cycle on {:?} ({}), skipping", location, key);
            return Ok(Some(Token::Include { tokens: Vec::new() }));
        }

        let saved_shift = self.lexer.heading_shift;
        let saved_started = self.lexer.started;
        self.lexer.included.insert(key.clone());
        self.lexer.heading_shift =
            (saved_shift + shift).clamp(-MAX_HEADING_SHIFT, MAX_HEADING_SHIFT);
        self.lexer.started = false;

        log::debug!("Including {:?} (lines {:?}-{:?}, shift {})", location, from, to, shift);
        let result = match hooks.include(&location, from, to) {
            Some(text) => self.lexer.lex(&text),
            None => {
                log::warn!("Include hook returned nothing for {:?}", location);
                Ok(Vec::new())
            }
        };

        self.lexer.heading_shift = saved_shift;
        self.lexer.started = saved_started;
        self.lexer.included.remove(&key);

        Ok(Some(Token::Include { tokens: result? }))
    }

    pub(super) fn parse_include_code(&mut self) -> Option<Token> {
        if !self.is_include_code(self.pos) {
            return None;
        }
        let raw = self.lines[self.pos].content.clone();
        let directive = try_parse_include_code(&raw)?;
        self.pos += 1;

        let content = self
            .lexer
            .hooks()
            .include_code(directive.location, directive.from, directive.to)
            .unwrap_or_else(|| {
                log::warn!("Include-code hook returned nothing for {:?}", directive.location);
                raw.clone()
            });
        log::debug!("Included code from {:?}", directive.location);
        Some(Token::CodeBlock(CodeBlock {
            lang: directive.lang.map(str::to_string),
            from: directive.from,
            to: directive.to,
            content,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include() {
        assert_eq!(
            try_parse_include(r#"!INCLUDE "chapter.md""#),
            Some(Include {
                location: "chapter.md",
                from: None,
                to: None,
                heading_shift: 0,
            })
        );
        assert_eq!(
            try_parse_include("!include (a.md), l 2:5 s -1"),
            Some(Include {
                location: "a.md",
                from: Some(2),
                to: Some(5),
                heading_shift: -1,
            })
        );
        assert_eq!(
            try_parse_include("!INCLUDE 'a.md', l 0").map(|i| i.from),
            Some(Some(1))
        );
        assert!(try_parse_include("!INCLUDE a.md").is_none());
        assert!(try_parse_include(r#"!INCLUDECODE "a.rs""#).is_none());
    }

    #[test]
    fn test_include_code() {
        assert_eq!(
            try_parse_include_code(r#"!INCLUDECODE "src/main.rs" (rust), 3:9"#),
            Some(IncludeCode {
                location: "src/main.rs",
                lang: Some("rust"),
                from: Some(3),
                to: Some(9),
            })
        );
        assert_eq!(
            try_parse_include_code("!INCLUDECODE (x.py), :4"),
            Some(IncludeCode {
                location: "x.py",
                lang: None,
                from: None,
                to: Some(4),
            })
        );
    }
}
