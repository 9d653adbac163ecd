//! Links, images, reference links and autolinks.
//!
//! Labels, destinations and titles honor backslash escapes and are returned
//! unescaped. All offsets are byte offsets into the scanned text.

use std::sync::LazyLock;

use regex::Regex;

use super::{InlineParser, Stop};
use crate::error::Error;
use crate::syntax::{Image, Link, Token};

static AUTOLINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z][a-zA-Z0-9+.\-]{1,31}):([^<>\x00-\x20]*)$")
        .expect("autolink regex should compile")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,})$",
    )
    .expect("email regex should compile")
});

/// An inline `[label](href "title")` match.
#[derive(Debug, PartialEq, Eq)]
pub struct LinkMatch {
    pub label: String,
    pub href: String,
    pub title: Option<String>,
    pub end: usize,
}

/// A `[label][ref]`, `[label][]`, `[label]` or `[^note]` match.
#[derive(Debug, PartialEq, Eq)]
pub struct ReferenceMatch {
    pub footnote: bool,
    pub label: String,
    pub reference: String,
    pub end: usize,
}

/// Push the character at `pos` and return the offset after it.
fn take_char(text: &str, pos: usize, out: &mut String) -> usize {
    match text[pos..].chars().next() {
        Some(c) => {
            out.push(c);
            pos + c.len_utf8()
        }
        None => pos,
    }
}

fn skip_whitespace(text: &str, mut pos: usize) -> usize {
    while let Some(c) = text[pos..].chars().next()
        && c.is_whitespace()
    {
        pos += c.len_utf8();
    }
    pos
}

/// A bracketed label with balanced inner brackets: `(label, end)`.
pub fn parse_link_label(text: &str, start: usize) -> Option<(String, usize)> {
    if !text[start..].starts_with('[') {
        return None;
    }
    let bytes = text.as_bytes();
    let mut pos = start + 1;
    let mut depth = 1;
    let mut label = String::new();
    while pos < text.len() {
        match bytes[pos] {
            b'\\' if pos + 1 < text.len() => {
                pos = take_char(text, pos + 1, &mut label);
                continue;
            }
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some((label, pos + 1));
                }
            }
            _ => {}
        }
        pos = take_char(text, pos, &mut label);
    }
    None
}

/// A link destination, either `<...>` or bare with balanced parentheses.
pub fn parse_link_destination(text: &str, start: usize) -> Option<(String, usize)> {
    let bytes = text.as_bytes();
    let mut href = String::new();

    if text[start..].starts_with('<') {
        let mut pos = start + 1;
        while pos < text.len() {
            match bytes[pos] {
                b'>' => return Some((href, pos + 1)),
                b'\\' if pos + 1 < text.len() => pos = take_char(text, pos + 1, &mut href),
                b'\n' | b'<' => return None,
                _ => pos = take_char(text, pos, &mut href),
            }
        }
        return None;
    }

    let mut pos = start;
    let mut parens = 0usize;
    while pos < text.len() {
        match bytes[pos] {
            b' ' | b'\n' => break,
            b'\\' if pos + 1 < text.len() => pos = take_char(text, pos + 1, &mut href),
            b'\\' => break,
            b')' if parens == 0 => break,
            b')' => {
                parens -= 1;
                pos = take_char(text, pos, &mut href);
            }
            b'(' => {
                parens += 1;
                pos = take_char(text, pos, &mut href);
            }
            _ => pos = take_char(text, pos, &mut href),
        }
    }
    (parens == 0).then_some((href, pos))
}

/// A link title in `'...'`, `"..."` or `(...)`.
pub fn parse_link_title(text: &str, start: usize) -> Option<(String, usize)> {
    let closing = match text[start..].chars().next()? {
        '\'' => b'\'',
        '"' => b'"',
        '(' => b')',
        _ => return None,
    };
    let bytes = text.as_bytes();
    let mut pos = start + 1;
    let mut title = String::new();
    while pos < text.len() {
        match bytes[pos] {
            b if b == closing => return Some((title, pos + 1)),
            b'\\' if pos + 1 < text.len() => pos = take_char(text, pos + 1, &mut title),
            _ => pos = take_char(text, pos, &mut title),
        }
    }
    None
}

/// Try to parse `[label](destination "title")` at the start of `text`.
pub fn try_parse_inline_link(text: &str) -> Option<LinkMatch> {
    let (label, mut pos) = parse_link_label(text, 0)?;

    pos = skip_whitespace(text, pos);
    if !text[pos..].starts_with('(') {
        return None;
    }
    pos = skip_whitespace(text, pos + 1);

    let (href, end) = parse_link_destination(text, pos)?;
    pos = skip_whitespace(text, end);

    let mut title = None;
    if let Some((parsed, end)) = parse_link_title(text, pos) {
        title = Some(parsed);
        pos = end;
    }

    pos = skip_whitespace(text, pos);
    if !text[pos..].starts_with(')') {
        return None;
    }
    Some(LinkMatch {
        label,
        href,
        title,
        end: pos + 1,
    })
}

/// Try to parse a reference link or footnote reference at the start of
/// `text`. An empty second label refers back to the first.
pub fn try_parse_reference_link(text: &str) -> Option<ReferenceMatch> {
    let (label, end) = parse_link_label(text, 0)?;

    if text[end..].starts_with('[') {
        let (second, end) = parse_link_label(text, end)?;
        let second = second.trim();
        let reference = if second.is_empty() {
            label.trim().to_string()
        } else {
            second.to_string()
        };
        return Some(ReferenceMatch {
            footnote: false,
            label,
            reference,
            end,
        });
    }

    let trimmed = label.trim();
    if let Some(note) = trimmed.strip_prefix('^') {
        return Some(ReferenceMatch {
            footnote: true,
            label: note.to_string(),
            reference: note.to_string(),
            end,
        });
    }
    let reference = trimmed.to_string();
    Some(ReferenceMatch {
        footnote: false,
        label,
        reference,
        end,
    })
}

/// Try to parse `<scheme:...>` or `<user@host>`. Returns
/// `(total_len, text, href)`.
pub fn try_parse_autolink(text: &str) -> Option<(usize, &str, String)> {
    let inner = text.strip_prefix('<')?;
    let close = inner.find(['>', '<'])?;
    if !inner[close..].starts_with('>') {
        return None;
    }
    let raw = &inner[..close];
    let href = if AUTOLINK.is_match(raw) {
        raw.to_string()
    } else if EMAIL.is_match(raw) {
        format!("mailto:{}", raw)
    } else {
        return None;
    };
    Some((close + 2, raw, href))
}

impl InlineParser<'_, '_> {
    /// Tokenize a link label one anchor level deeper, so it cannot contain
    /// another link. Raw `<a>` tags inside the label carry over.
    fn parse_label(&mut self, label: &str) -> Result<Vec<Token>, Error> {
        let level = self.link_level + 1;
        let mut child = InlineParser::new(&mut *self.lexer, label, level);
        let tokens = child.tokenize(Stop::End)?;
        self.link_level += child.link_level - level;
        Ok(tokens)
    }

    pub(super) fn parse_bracket(&mut self, out: &mut Vec<Token>) -> Result<(), Error> {
        if self.link_level < 1
            && let Some(link) = try_parse_inline_link(self.rest())
        {
            self.flush(out);
            let label = self.parse_label(&link.label)?;
            out.push(Token::Link(Link {
                label,
                href: link.href,
                title: link.title,
            }));
            self.pos += link.end;
            return Ok(());
        }

        match try_parse_reference_link(self.rest()) {
            Some(found) if found.footnote => {
                self.flush(out);
                self.lexer.register_footnote(&found.reference);
                out.push(Token::FootnoteRef {
                    reference: found.reference,
                });
                self.pos += found.end;
            }
            Some(found) if self.link_level < 1 => {
                self.flush(out);
                let label = self.parse_label(&found.label)?;
                out.push(Token::RefLink {
                    label,
                    reference: found.reference,
                });
                self.pos += found.end;
            }
            _ => {
                self.buffer.push('[');
                self.pos += 1;
            }
        }
        Ok(())
    }

    /// `![alt](src "title")`; a `!` that starts no image stays literal.
    pub(super) fn parse_image(&mut self, out: &mut Vec<Token>) -> bool {
        let Some(link) = try_parse_inline_link(&self.rest()[1..]) else {
            return false;
        };
        self.flush(out);
        self.pos += 1 + link.end;
        out.push(Token::Image(Image {
            alt: link.label,
            href: link.href,
            title: link.title,
        }));
        true
    }

    pub(super) fn parse_autolink(&mut self, out: &mut Vec<Token>) -> bool {
        let Some((len, text, href)) = try_parse_autolink(self.rest()) else {
            return false;
        };
        let text = text.to_string();
        self.flush(out);
        out.push(Token::Link(Link {
            label: vec![Token::text(text)],
            href,
            title: None,
        }));
        self.pos += len;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(parse_link_label("[a [b] c] x", 0), Some(("a [b] c".to_string(), 9)));
        assert_eq!(parse_link_label(r"[a \] b]", 0), Some(("a ] b".to_string(), 8)));
        assert_eq!(parse_link_label("[open", 0), None);
    }

    #[test]
    fn test_destination() {
        assert_eq!(parse_link_destination("<a b>", 0), Some(("a b".to_string(), 5)));
        assert_eq!(parse_link_destination("<a\nb>", 0), None);
        assert_eq!(parse_link_destination("a(b)c) x", 0), Some(("a(b)c".to_string(), 5)));
        assert_eq!(parse_link_destination("a(b", 0), None);
        assert_eq!(parse_link_destination(r"a\ b", 0), Some(("a b".to_string(), 4)));
    }

    #[test]
    fn test_title() {
        assert_eq!(parse_link_title(r#""t \" q""#, 0), Some((r#"t " q"#.to_string(), 8)));
        assert_eq!(parse_link_title("(paren)", 0), Some(("paren".to_string(), 7)));
        assert_eq!(parse_link_title("'open", 0), None);
        assert_eq!(parse_link_title("x", 0), None);
    }

    #[test]
    fn test_inline_link() {
        let link = try_parse_inline_link(r#"[text]( /url "Title" ) rest"#).unwrap();
        assert_eq!(link.label, "text");
        assert_eq!(link.href, "/url");
        assert_eq!(link.title.as_deref(), Some("Title"));
        assert_eq!(link.end, 22);

        assert_eq!(try_parse_inline_link("[x]()").map(|l| l.href), Some(String::new()));
        assert!(try_parse_inline_link("[x] (y").is_none());
        assert!(try_parse_inline_link("[x][y]").is_none());
    }

    #[test]
    fn test_reference_forms() {
        let full = try_parse_reference_link("[Text][ Ref ]").unwrap();
        assert_eq!((full.label.as_str(), full.reference.as_str()), ("Text", "Ref"));

        let collapsed = try_parse_reference_link("[ Text ][]").unwrap();
        assert_eq!(collapsed.reference, "Text");
        assert_eq!(collapsed.end, 10);

        let shortcut = try_parse_reference_link("[Text] more").unwrap();
        assert_eq!(shortcut.reference, "Text");
        assert_eq!(shortcut.end, 6);

        let note = try_parse_reference_link("[^1]").unwrap();
        assert!(note.footnote);
        assert_eq!(note.reference, "1");

        assert!(try_parse_reference_link("[a][b").is_none());
    }

    #[test]
    fn test_autolink() {
        assert_eq!(
            try_parse_autolink("<https://example.com> x"),
            Some((21, "https://example.com", "https://example.com".to_string()))
        );
        assert_eq!(
            try_parse_autolink("<me@example.org>"),
            Some((16, "me@example.org", "mailto:me@example.org".to_string()))
        );
        assert!(try_parse_autolink("<not a link>").is_none());
        assert!(try_parse_autolink("<a<b>").is_none());
        assert!(try_parse_autolink("<https://x").is_none());
    }
}
