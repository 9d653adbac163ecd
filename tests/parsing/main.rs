//! Document-level behavior of the parser and renderer through the public API.

mod fallbacks;
mod properties;
mod rendering;

use mkimp::Token;

/// Concatenated text of a token list, ignoring markup.
pub fn plain(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Text { text } => out.push_str(text),
            Token::NewLine => out.push('\n'),
            Token::Bold { tokens }
            | Token::Italic { tokens }
            | Token::Underline { tokens }
            | Token::Strikethrough { tokens }
            | Token::Highlight { tokens }
            | Token::Overline { tokens }
            | Token::Paragraph { tokens, .. } => out.push_str(&plain(tokens)),
            _ => {}
        }
    }
    out
}

pub fn parse(input: &str) -> mkimp::Document {
    mkimp::parse(input, None).expect("document should parse")
}
