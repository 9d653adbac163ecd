//! Malformed or unsupported markup degrades to literal text.

use mkimp::{Config, Hooks, Token};

use super::{parse, plain};

#[test]
fn unclosed_markers_are_literal() {
    for input in ["**open", "a * b", "==half", "`tick", "$cash", "[label", "||x"] {
        let doc = parse(input);
        assert_eq!(plain(&doc.tokens), input, "input {input:?}");
    }
}

#[test]
fn unknown_emoji_is_literal() {
    let doc = parse(":not-an-emoji:");
    assert_eq!(plain(&doc.tokens), ":not-an-emoji:");
}

#[test]
fn include_without_collaborator_is_text() {
    let doc = parse("!INCLUDE \"part.md\"");
    assert_eq!(plain(&doc.tokens), "!INCLUDE \"part.md\"");
}

#[test]
fn rejected_front_matter_is_content() {
    let doc = parse("---\ntitle: not json\n---\n");
    assert!(doc.metadata.is_empty());
    assert!(!doc.tokens.is_empty());
}

#[test]
fn front_matter_feeds_metadata() {
    let hooks = Hooks::new().with_front_matter(|raw| {
        let (key, value) = raw.split_once(':')?;
        Some(serde_json::json!({ key.trim(): value.trim() }))
    });
    let doc = mkimp::parse_with("---\ntitle: Guide\n---\n{{title}}", &Config::default(), &hooks)
        .unwrap();
    assert_eq!(doc.metadata["title"], "Guide");
    let [Token::Paragraph { tokens, .. }] = doc.tokens.as_slice() else {
        panic!("expected a paragraph, got {:?}", doc.tokens);
    };
    assert_eq!(
        tokens,
        &[Token::Metadata {
            name: "title".to_string(),
            value: Some("Guide".to_string()),
        }]
    );
}

#[test]
fn footnote_end_needs_a_reference() {
    let doc = parse("Text.\n\n[^a]: Unused.");
    assert!(!doc.tokens.contains(&Token::FootnoteEnd));
    assert!(doc.footnote_defs.contains_key("a"));
}

#[test]
fn flat_unclosed_delimiters_do_not_exhaust_nesting() {
    for unit in ["a_b*", "x*y_", "==b~~", "_*"] {
        let input = unit.repeat(40);
        let doc = mkimp::parse(&input, None);
        assert!(doc.is_ok(), "input {input:?} failed: {doc:?}");
        assert!(mkimp::to_html(&input, None).is_ok());
    }
}
