//! Raw HTML grammar shared by the block and inline tokenizers.

use std::sync::LazyLock;

use regex::Regex;

const ATTR_NAME: &str = r"[a-zA-Z_:][a-zA-Z0-9:._-]*";
const UNQUOTED: &str = r#"[^"'=<>`\x00-\x20]+"#;
const SINGLE_QUOTED: &str = r"'[^']*'";
const DOUBLE_QUOTED: &str = r#""[^"]*""#;

const BLOCK_NAMES: &[&str] = &[
    "address",
    "article",
    "aside",
    "base",
    "basefont",
    "blockquote",
    "body",
    "caption",
    "center",
    "col",
    "colgroup",
    "dd",
    "details",
    "dialog",
    "dir",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "frame",
    "frameset",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "head",
    "header",
    "hr",
    "html",
    "iframe",
    "legend",
    "li",
    "link",
    "main",
    "menu",
    "menuitem",
    "nav",
    "noframes",
    "ol",
    "optgroup",
    "option",
    "p",
    "param",
    "section",
    "source",
    "summary",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "title",
    "tr",
    "track",
    "ul",
];

fn open_tag() -> String {
    let attr_value = format!("(?:{UNQUOTED}|{SINGLE_QUOTED}|{DOUBLE_QUOTED})");
    let attribute = format!(r"(?:\s+{ATTR_NAME}(?:\s*=\s*{attr_value})?)");
    format!(r"<[A-Za-z][A-Za-z0-9\-]*{attribute}*\s*/?>")
}

const CLOSE_TAG: &str = r"</[A-Za-z][A-Za-z0-9\-]*\s*>";
const COMMENT: &str = r"<!---->|<!--(?:-?[^>-])(?:-?[^-])*-->";
const PROCESSING: &str = r"<[?][\s\S]*?[?]>";
const DECLARATION: &str = r"<![A-Z]+\s+[^>]*>";
const CDATA: &str = r"<!\[CDATA\[[\s\S]*?\]\]>";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("HTML grammar regex should compile")
}

/// Any single tag, comment, processing instruction, declaration or CDATA
/// section at the start of the input.
static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        "^(?:{}|{CLOSE_TAG}|{COMMENT}|{PROCESSING}|{DECLARATION}|{CDATA})",
        open_tag()
    ))
});

static HTML_LINK_OPEN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^<a[>\s]"));
static HTML_LINK_CLOSE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^</a\s*>"));

/// Opening and closing condition for one category of HTML block.
#[derive(Debug)]
pub struct HtmlBlockPattern {
    open: Regex,
    close: Regex,
}

impl HtmlBlockPattern {
    fn new(open: &str, close: &str) -> Self {
        Self {
            open: compile(open),
            close: compile(close),
        }
    }

    /// Whether `line` ends a block of this category.
    pub fn closes(&self, line: &str) -> bool {
        self.close.is_match(line)
    }
}

/// Block categories in priority order; the first whose opening matches wins.
static HTML_BLOCK_PATTERNS: LazyLock<Vec<HtmlBlockPattern>> = LazyLock::new(|| {
    vec![
        // Raw text elements, closed by their end tag
        HtmlBlockPattern::new(
            r"(?i)^<(script|pre|style|svg|textarea)(\s|>|$)",
            r"(?i)</(script|pre|style|svg|textarea)>",
        ),
        HtmlBlockPattern::new(r"^<!--", r"-->"),
        HtmlBlockPattern::new(r"^<\?", r"\?>"),
        HtmlBlockPattern::new(r"^<![A-Z]", r">"),
        HtmlBlockPattern::new(r"^<!\[CDATA\[", r"\]\]>"),
        // Block-level tag, closed by a blank line
        HtmlBlockPattern::new(
            &format!(r"(?i)^</?({})(\s|/?>|$)", BLOCK_NAMES.join("|")),
            r"^$",
        ),
        // A lone open or close tag, closed by a blank line
        HtmlBlockPattern::new(&format!(r"^(?:{}|{CLOSE_TAG})\s*$", open_tag()), r"^$"),
        // A line made only of tags
        HtmlBlockPattern::new(
            r"^([ \t]*</?[a-zA-Z][\w:-]*(\s[^<>]*?)?>[ \t]*)+$",
            r"^.*$",
        ),
    ]
});

/// The HTML block category `line` opens, if any.
pub fn html_block_start(line: &str) -> Option<&'static HtmlBlockPattern> {
    if !line.trim().starts_with('<') {
        return None;
    }
    HTML_BLOCK_PATTERNS.iter().find(|p| p.open.is_match(line))
}

/// The raw HTML fragment at the start of `src`, if `src` begins with one.
pub fn match_html_tag(src: &str) -> Option<&str> {
    let mut chars = src.chars();
    if chars.next() != Some('<') {
        return None;
    }
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || matches!(c, '!' | '/' | '?') => {}
        _ => return None,
    }
    HTML_TAG_RE.find(src).map(|m| m.as_str())
}

/// How a raw tag changes anchor nesting: `<a …>` opens, `</a>` closes.
pub fn link_level_delta(tag: &str) -> i32 {
    if HTML_LINK_OPEN.is_match(tag) {
        1
    } else if HTML_LINK_CLOSE.is_match(tag) {
        -1
    } else {
        0
    }
}
