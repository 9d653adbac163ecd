//! Short directives inside text: `:emoji:`, `{{metadata}}` and
//! `!YOUTUBE[title]{vid="..."}` embeds.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::InlineParser;
use crate::syntax::Token;

static YOUTUBE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^!YOUTUBE\[(.*?)\]\{(.*?)\}").expect("youtube regex should compile")
});

static ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+)="(.*?)""#).expect("attribute regex should compile"));

/// Name inside `{{name}}`; the closing braces must be on the same line.
/// Returns `(total_len, name)`.
pub fn try_parse_metadata(text: &str) -> Option<(usize, &str)> {
    let inner = text.strip_prefix("{{")?;
    let end = inner.find("}}")?;
    let name = &inner[..end];
    (!name.contains('\n')).then_some((end + 4, name))
}

/// Name between colons. Returns `(total_len, name)`; whether the name is a
/// known emoji is up to the caller.
pub fn try_parse_emoji(text: &str) -> Option<(usize, &str)> {
    let inner = text.strip_prefix(':')?;
    let end = inner.find([':', '\\', '\n'])?;
    inner[end..]
        .starts_with(':')
        .then(|| (end + 2, &inner[..end]))
}

/// `!YOUTUBE[title]{vid="id" ...}`. Returns `(total_len, title, attributes)`.
pub fn try_parse_youtube(text: &str) -> Option<(usize, &str, BTreeMap<String, String>)> {
    let caps = YOUTUBE.captures(text)?;
    let attributes: BTreeMap<String, String> = ATTRIBUTE
        .captures_iter(caps.get(2)?.as_str())
        .map(|attr| (attr[1].to_string(), attr[2].to_string()))
        .collect();
    if !attributes.contains_key("vid") {
        return None;
    }
    Some((caps.get(0)?.end(), caps.get(1)?.as_str(), attributes))
}

impl InlineParser<'_, '_> {
    pub(super) fn parse_metadata(&mut self, out: &mut Vec<Token>) {
        let Some((len, name)) = try_parse_metadata(self.rest()) else {
            self.buffer.push('{');
            self.pos += 1;
            return;
        };
        let name = name.to_string();
        self.flush(out);
        self.pos += len;
        let value = self.lexer.metadata.get(&name).cloned();
        if value.is_none() {
            log::debug!("No metadata value for {{{{{}}}}}", name);
        }
        out.push(Token::Metadata { name, value });
    }

    pub(super) fn parse_emoji(&mut self, out: &mut Vec<Token>) {
        if let Some((len, name)) = try_parse_emoji(self.rest())
            && self.lexer.has_emoji(name)
        {
            let name = name.to_string();
            self.flush(out);
            self.pos += len;
            out.push(Token::Emoji { name });
            return;
        }
        self.buffer.push(':');
        self.pos += 1;
    }

    /// Handle `!`: a YouTube embed, an image, or a literal `!`.
    pub(super) fn parse_bang(&mut self, out: &mut Vec<Token>) {
        if let Some((len, title, attributes)) = try_parse_youtube(self.rest()) {
            let title = title.to_string();
            self.flush(out);
            self.pos += len;
            out.push(Token::YoutubeEmbed { title, attributes });
            return;
        }
        if self.rest()[1..].starts_with('[') && self.parse_image(out) {
            return;
        }
        self.buffer.push('!');
        self.pos += 1;
    }
}
