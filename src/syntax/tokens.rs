//! Token tree produced by the block and inline parsers.
//!
//! One enum covers both block and inline constructs because list items
//! freely mix the two: a tight item splices its paragraph's inline tokens
//! next to nested blocks.

use std::collections::BTreeMap;

use serde::Serialize;

/// Column alignment of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Align {
    Default,
    Left,
    Center,
    Right,
}

impl Align {
    /// The CSS `text-align` value, or `None` for the default alignment.
    pub fn as_css(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Left => Some("left"),
            Self::Center => Some("center"),
            Self::Right => Some("right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    pub id: Option<String>,
    pub is_underline: bool,
    /// Dotted section number (`1.2.`) for `#!` headings, empty otherwise.
    pub heading_index: String,
    pub depth: usize,
    pub tokens: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlock {
    pub lang: Option<String>,
    /// First line of an `!INCLUDECODE` range (1-based).
    pub from: Option<usize>,
    pub to: Option<usize>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub task: bool,
    pub checked: bool,
    pub tokens: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    /// Digits of the first ordered marker, kept verbatim (`"007"`).
    pub start_at: Option<String>,
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub header: bool,
    pub align: Align,
    pub tokens: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionItem {
    pub term: Vec<Token>,
    pub definitions: Vec<Vec<Token>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tex {
    pub text: String,
    /// Produced by the inline parser (`$…$`, `$$…$$`) rather than a `$$` block.
    pub inline: bool,
    pub display_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spoiler {
    pub title: Vec<Token>,
    pub inline: bool,
    pub tokens: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub label: Vec<Token>,
    pub href: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub alt: String,
    pub href: String,
    pub title: Option<String>,
}

/// A node of the document tree.
///
/// Containers own their children; nothing is shared between parents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Token {
    // Blocks
    Heading(Heading),
    #[serde(rename = "codeblock")]
    CodeBlock(CodeBlock),
    Horizontal {
        character: char,
    },
    Paragraph {
        /// Source line count; list tightness depends on it.
        #[serde(skip)]
        lines: usize,
        tokens: Vec<Token>,
    },
    #[serde(rename = "blockquote")]
    BlockQuote {
        tokens: Vec<Token>,
    },
    List(List),
    Table(Table),
    DefinitionList {
        items: Vec<DefinitionItem>,
    },
    Tex(Tex),
    Spoiler(Spoiler),
    Include {
        tokens: Vec<Token>,
    },
    Html {
        content: String,
    },
    FootnoteEnd,

    // Inlines
    Text {
        text: String,
    },
    Bold {
        tokens: Vec<Token>,
    },
    Italic {
        tokens: Vec<Token>,
    },
    Underline {
        tokens: Vec<Token>,
    },
    Strikethrough {
        tokens: Vec<Token>,
    },
    Highlight {
        tokens: Vec<Token>,
    },
    Overline {
        tokens: Vec<Token>,
    },
    Emoji {
        name: String,
    },
    #[serde(rename = "newline")]
    NewLine,
    FootnoteRef {
        #[serde(rename = "ref")]
        reference: String,
    },
    Image(Image),
    Link(Link),
    #[serde(rename = "reflink")]
    RefLink {
        label: Vec<Token>,
        #[serde(rename = "ref")]
        reference: String,
    },
    #[serde(rename = "codespan")]
    CodeSpan {
        text: String,
    },
    Metadata {
        name: String,
        value: Option<String>,
    },
    YoutubeEmbed {
        title: String,
        attributes: BTreeMap<String, String>,
    },
}

impl Token {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// The serialized type tag, handy for logging and shallow assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Heading(_) => "heading",
            Self::CodeBlock(_) => "codeblock",
            Self::Horizontal { .. } => "horizontal",
            Self::Paragraph { .. } => "paragraph",
            Self::BlockQuote { .. } => "blockquote",
            Self::List(_) => "list",
            Self::Table(_) => "table",
            Self::DefinitionList { .. } => "definitionList",
            Self::Tex(_) => "tex",
            Self::Spoiler(_) => "spoiler",
            Self::Include { .. } => "include",
            Self::Html { .. } => "html",
            Self::FootnoteEnd => "footnoteEnd",
            Self::Text { .. } => "text",
            Self::Bold { .. } => "bold",
            Self::Italic { .. } => "italic",
            Self::Underline { .. } => "underline",
            Self::Strikethrough { .. } => "strikethrough",
            Self::Highlight { .. } => "highlight",
            Self::Overline { .. } => "overline",
            Self::Emoji { .. } => "emoji",
            Self::NewLine => "newline",
            Self::FootnoteRef { .. } => "footnoteRef",
            Self::Image(_) => "image",
            Self::Link(_) => "link",
            Self::RefLink { .. } => "reflink",
            Self::CodeSpan { .. } => "codespan",
            Self::Metadata { .. } => "metadata",
            Self::YoutubeEmbed { .. } => "youtubeEmbed",
        }
    }
}
