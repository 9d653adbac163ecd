//! HTML escaping and URL cleaning.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// A character reference right after `&`: `#123;`, `#x1F;` or `name;`.
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:#\d{1,7}|#[Xx][a-fA-F0-9]{1,6}|\w+);").expect("entity regex should compile")
});

fn replacement(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

fn escape_with(text: &str, keep_entities: bool) -> Cow<'_, str> {
    let needs_escape = |idx: usize, c: char| {
        replacement(c).is_some() && !(keep_entities && c == '&' && ENTITY.is_match(&text[idx + 1..]))
    };
    if !text.char_indices().any(|(idx, c)| needs_escape(idx, c)) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for (idx, c) in text.char_indices() {
        match replacement(c) {
            Some(entity) if needs_escape(idx, c) => out.push_str(entity),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape text content. Character references already in the text are kept.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape_with(text, true)
}

/// Escape every special character, for code and quoted attribute values.
pub fn escape_attr(text: &str) -> Cow<'_, str> {
    escape_with(text, false)
}

/// Characters `encodeURI` leaves alone, plus `%` so existing escapes stay
/// intact.
fn is_url_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-_.!~*'();/?:@&=+$,#%".contains(&b)
}

/// Percent-encode `href` for use in an `href`/`src` attribute.
pub fn clean_url(href: &str) -> Cow<'_, str> {
    if href.bytes().all(is_url_safe) {
        return Cow::Borrowed(href);
    }
    let mut out = String::with_capacity(href.len() + 16);
    for b in href.bytes() {
        if is_url_safe(b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    Cow::Owned(out)
}
