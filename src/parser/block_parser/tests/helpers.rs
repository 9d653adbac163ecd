use crate::config::Config;
use crate::hooks::Hooks;
use crate::parser::parse_document;
use crate::syntax::{Document, Token};

pub(super) fn parse_doc_with(input: &str, config: &Config, hooks: &Hooks) -> Document {
    parse_document(input, config, hooks).expect("document should parse")
}

pub(super) fn parse_doc(input: &str) -> Document {
    parse_doc_with(input, &Config::default(), &Hooks::new())
}

pub(super) fn parse(input: &str) -> Vec<Token> {
    parse_doc(input).tokens
}

pub(super) fn text(s: &str) -> Token {
    Token::text(s)
}

pub(super) fn paragraph(lines: usize, tokens: Vec<Token>) -> Token {
    Token::Paragraph { lines, tokens }
}

pub(super) fn kinds(tokens: &[Token]) -> Vec<&'static str> {
    tokens.iter().map(Token::kind).collect()
}
