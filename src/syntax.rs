//! Owned document tree: tokens and the document root.

mod document;
mod tokens;

pub use document::{Document, LinkRef};
pub use tokens::{
    Align, Cell, CodeBlock, DefinitionItem, Heading, Image, Link, List, ListItem, Spoiler, Table,
    Tex, Token,
};
