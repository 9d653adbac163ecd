use super::helpers::*;
use crate::syntax::{CodeBlock, Tex, Token};

fn code(lang: Option<&str>, content: &str) -> Token {
    Token::CodeBlock(CodeBlock {
        lang: lang.map(str::to_string),
        from: None,
        to: None,
        content: content.to_string(),
    })
}

#[test]
fn fenced_code_keeps_inner_indentation() {
    assert_eq!(
        parse("```rust\nfn main() {}\n    indented\n```"),
        vec![code(Some("rust"), "fn main() {}\n    indented")]
    );
}

#[test]
fn unclosed_fence_runs_to_end() {
    assert_eq!(parse("```\na\nb"), vec![code(None, "a\nb")]);
}

#[test]
fn longer_fence_needs_longer_close() {
    assert_eq!(
        parse("````\n```\n````"),
        vec![code(None, "```")]
    );
}

#[test]
fn fence_content_is_not_parsed() {
    assert_eq!(parse("```\n# not a heading\n```"), vec![code(None, "# not a heading")]);
}

#[test]
fn indented_code() {
    assert_eq!(
        parse("para\n\n    code line\n    more"),
        vec![
            paragraph(1, vec![text("para")]),
            code(None, "code line\nmore"),
        ]
    );
}

#[test]
fn display_math_block() {
    assert_eq!(
        parse("$$\nx^2\n\ny\n$$"),
        vec![Token::Tex(Tex {
            text: "x^2\ny".to_string(),
            inline: false,
            display_mode: true,
        })]
    );
}

#[test]
fn unclosed_fence_stops_at_container_end() {
    assert_eq!(
        parse("> ```\n> a\n\nafter"),
        vec![
            Token::BlockQuote {
                tokens: vec![code(None, "a")],
            },
            paragraph(1, vec![text("after")]),
        ]
    );
}
