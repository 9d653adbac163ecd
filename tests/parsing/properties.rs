use mkimp::syntax::{CodeBlock, Heading};
use mkimp::Token;
use similar_asserts::assert_eq;

use super::{parse, plain};

fn text(s: &str) -> Token {
    Token::text(s)
}

fn paragraph_tokens(tokens: &[Token]) -> &[Token] {
    match tokens {
        [Token::Paragraph { tokens, .. }] => tokens,
        other => panic!("expected a single paragraph, got {other:?}"),
    }
}

#[test]
fn parsing_is_deterministic() {
    let input = "# A\n\n- [x] *one* [^n]\n- two\n\n| a | b |\n|---|:-:|\n| 1 |\n\n[^n]: Note.\n";
    let first = serde_json::to_string(&parse(input)).unwrap();
    let second = serde_json::to_string(&parse(input)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn parsing_is_total() {
    let inputs = [
        "",
        "   ",
        "\n\n\n",
        "*",
        "[",
        "`",
        "|",
        "$",
        "![",
        "<",
        "[^",
        "> ",
        "- ",
        "1.",
        "```",
        "$$",
        "!>",
        "<!",
        "---",
        "***\n___",
        "[a](",
        "[a][",
        "**_~~==||",
        "<a href=",
        "{{",
        ":smile",
        "a | b\n-",
        "!INCLUDE \"",
        "\t\t- \t> [x]",
    ];
    for input in inputs {
        assert!(mkimp::parse(input, None).is_ok(), "failed on {input:?}");
        assert!(mkimp::to_html(input, None).is_ok(), "failed on {input:?}");
    }
}

#[test]
fn indexed_headings_are_numbered_in_order() {
    let doc = parse("#! A\n##! B\n##! C\n#! D");
    let indexes: Vec<&str> = doc
        .tokens
        .iter()
        .map(|t| match t {
            Token::Heading(h) => h.heading_index.as_str(),
            other => panic!("expected heading, got {other:?}"),
        })
        .collect();
    assert_eq!(indexes, vec!["1.", "1.1.", "1.2.", "2."]);
}

#[test]
fn plain_headings_are_not_numbered() {
    let doc = parse("# A");
    assert_eq!(
        doc.tokens,
        vec![Token::Heading(Heading {
            id: Some("a".to_string()),
            is_underline: false,
            heading_index: String::new(),
            depth: 1,
            tokens: vec![text("A")],
        })]
    );
}

#[test]
fn fence_keeps_language_and_content() {
    assert_eq!(
        parse("```js\ncode\n```").tokens,
        vec![Token::CodeBlock(CodeBlock {
            lang: Some("js".to_string()),
            from: None,
            to: None,
            content: "code".to_string(),
        })]
    );
}

#[test]
fn shorter_fence_does_not_close() {
    let doc = parse("```js\ncode\n``\nmore\n```");
    let [Token::CodeBlock(code)] = doc.tokens.as_slice() else {
        panic!("expected one code block, got {:?}", doc.tokens);
    };
    assert_eq!(code.content, "code\n``\nmore");
}

#[test]
fn longer_fence_closes() {
    let doc = parse("```js\ncode\n````\nafter");
    let [Token::CodeBlock(code), Token::Paragraph { .. }] = doc.tokens.as_slice() else {
        panic!("expected code block then paragraph, got {:?}", doc.tokens);
    };
    assert_eq!(code.content, "code");
}

#[test]
fn triple_emphasis_nests_italic_in_bold() {
    let doc = parse("***bold italic***");
    assert_eq!(
        paragraph_tokens(&doc.tokens),
        &[Token::Bold {
            tokens: vec![Token::Italic {
                tokens: vec![text("bold italic")]
            }]
        }]
    );
}

#[test]
fn italic_inside_bold() {
    let doc = parse("**a*b*c**");
    assert_eq!(
        paragraph_tokens(&doc.tokens),
        &[Token::Bold {
            tokens: vec![
                text("a"),
                Token::Italic {
                    tokens: vec![text("b")]
                },
                text("c"),
            ]
        }]
    );
}

#[test]
fn inline_link() {
    let doc = parse("[x](y)");
    let [Token::Link(link)] = paragraph_tokens(&doc.tokens) else {
        panic!("expected a link, got {:?}", doc.tokens);
    };
    assert_eq!(link.href, "y");
    assert_eq!(link.label, vec![text("x")]);
}

#[test]
fn undefined_reference_stays_a_reference() {
    let doc = parse("[x][y]");
    assert_eq!(
        paragraph_tokens(&doc.tokens),
        &[Token::RefLink {
            label: vec![text("x")],
            reference: "y".to_string(),
        }]
    );
    assert!(doc.reflinks.is_empty());
}

#[test]
fn shortcut_reference_resolves_through_table() {
    let doc = parse("[x]\n\n[x]: https://example.com");
    assert_eq!(
        paragraph_tokens(&doc.tokens),
        &[Token::RefLink {
            label: vec![text("x")],
            reference: "x".to_string(),
        }]
    );
    assert_eq!(doc.reflinks["x"].link, "https://example.com");
}

#[test]
fn footnotes_are_numbered_by_first_use() {
    let doc = parse("See [^a] and [^b].\n\n[^b]: Bee.\n[^a]: Ay.");
    assert_eq!(doc.footnote_index("a"), Some(1));
    assert_eq!(doc.footnote_index("b"), Some(2));
    assert_eq!(doc.footnote_refs[&1], "a");
    assert_eq!(doc.footnote_defs.len(), 2);
    assert_eq!(doc.tokens.last(), Some(&Token::FootnoteEnd));
}

#[test]
fn tight_item_splices_inline_tokens() {
    let doc = parse("- one *two*");
    let [Token::List(list)] = doc.tokens.as_slice() else {
        panic!("expected a list, got {:?}", doc.tokens);
    };
    assert_eq!(
        list.items[0].tokens,
        vec![
            text("one "),
            Token::Italic {
                tokens: vec![text("two")]
            }
        ]
    );
}

#[test]
fn loose_item_keeps_paragraphs() {
    let doc = parse("- one\n\n    two");
    let [Token::List(list)] = doc.tokens.as_slice() else {
        panic!("expected a list, got {:?}", doc.tokens);
    };
    let kinds: Vec<_> = list.items[0].tokens.iter().map(Token::kind).collect();
    assert_eq!(kinds, vec!["paragraph", "paragraph"]);
}

#[test]
fn table_rows_match_header_width() {
    let doc = parse("| a | b | c |\n|---|---|---|\n| 1 |\n| 1 | 2 | 3 | 4 |");
    let [Token::Table(table)] = doc.tokens.as_slice() else {
        panic!("expected a table, got {:?}", doc.tokens);
    };
    assert_eq!(table.rows.len(), 2);
    for row in &table.rows {
        assert_eq!(row.len(), 3);
    }
    assert!(table.rows[0][1].tokens.is_empty());
    assert_eq!(plain(&table.rows[1][2].tokens), "3");
}

#[test]
fn nested_link_is_suppressed() {
    let doc = parse("[outer [inner](a) text](b)");
    let [Token::Link(link)] = paragraph_tokens(&doc.tokens) else {
        panic!("expected one link, got {:?}", doc.tokens);
    };
    assert_eq!(link.href, "b");
    assert!(link.label.iter().all(|t| !matches!(t, Token::Link(_))));
    assert_eq!(plain(&link.label), "outer [inner](a) text");
}

#[test]
fn document_serializes_with_type_tags() {
    let doc = parse("# Hi");
    insta::assert_json_snapshot!(doc.tokens, @r#"
    [
      {
        "type": "heading",
        "id": "hi",
        "isUnderline": false,
        "headingIndex": "",
        "depth": 1,
        "tokens": [
          {
            "type": "text",
            "text": "Hi"
          }
        ]
      }
    ]
    "#);
}

#[test]
fn paragraph_line_count_is_not_serialized() {
    let doc = parse("one\ntwo");
    let value = serde_json::to_value(&doc.tokens).unwrap();
    assert_eq!(value[0]["type"], "paragraph");
    assert!(value[0].get("lines").is_none());
    assert_eq!(value[0]["tokens"].as_array().map(Vec::len), Some(3));
}
