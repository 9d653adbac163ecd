use mkimp::{Config, Hooks, RenderTarget};
use similar_asserts::assert_eq;

fn html(input: &str) -> String {
    mkimp::to_html(input, None).unwrap()
}

#[test]
fn text_is_escaped() {
    assert_eq!(
        html(r"\<script>alert(1)\</script>"),
        r#"<p class="md-paragraph">&lt;script&gt;alert(1)&lt;/script&gt;</p>"#
    );
}

#[test]
fn attributes_escape_quotes() {
    let out = html(r#"![say "quote"](/i.png)"#);
    assert!(out.contains(r#"alt="say &quot;quote&quot;""#), "{out}");
}

#[test]
fn undefined_reference_renders_its_label() {
    assert_eq!(html("[x][y]"), r#"<p class="md-paragraph">[x]</p>"#);
}

#[test]
fn defined_reference_renders_a_link() {
    assert_eq!(
        html("[x]\n\n[x]: /target"),
        r#"<p class="md-paragraph"><a class="md-link" href="/target" target="_blank" rel="noopener">x</a></p>"#
    );
}

#[test]
fn footnote_list_follows_first_use() {
    let out = html("A[^a] B[^b]\n\n[^b]: Bee.\n[^a]: Ay.");
    let first = out.find(r#"id="fn:a""#).unwrap();
    let second = out.find(r#"id="fn:b""#).unwrap();
    assert!(first < second);
}

#[test]
fn render_reuses_a_parsed_document() {
    let config = Config {
        with_section: true,
        render_target: RenderTarget::Article,
        ..Config::default()
    };
    let doc = mkimp::parse("# A\ntext", Some(config.clone())).unwrap();
    let out = mkimp::render(&doc, &config, &Hooks::new());
    assert_eq!(
        out,
        concat!(
            r#"<article class="md-article" role="document" aria-label="Page content">"#,
            r#"<section class="md-section" role="region" aria-labelledby="a">"#,
            r#"<h1 id="a" class="md-heading">A</h1><p class="md-paragraph">text</p></section>"#,
            r#"</article>"#
        )
    );
}

#[test]
fn latex_collaborator_renders_math() {
    let hooks = Hooks::new().with_latex(|tex| format!("<m>{}</m>", tex.text));
    let doc = mkimp::parse_with("$x$", &Config::default(), &hooks).unwrap();
    assert_eq!(
        mkimp::render(&doc, &Config::default(), &hooks),
        r#"<p class="md-paragraph"><m>x</m></p>"#
    );
}
