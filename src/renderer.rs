//! HTML renderer for a parsed [`Document`].
//!
//! Every element carries an `md-*` class so the output can be styled
//! without touching the markup. Math and code highlighting are delegated to
//! the [`Hooks`]; without them math is emitted as escaped TeX and code as
//! escaped plain text.

use crate::config::{Config, EmojiRecord, RenderTarget};
use crate::hooks::Hooks;
use crate::syntax::{
    CodeBlock, Document, Heading, Link, List, ListItem, Spoiler, Table, Tex, Token,
};

mod escape;

pub use escape::{clean_url, escape_attr, escape_text};

pub struct Renderer<'d> {
    output: String,
    doc: &'d Document,
    hooks: &'d Hooks,
    with_section: bool,
    target: RenderTarget,
    /// Block spoilers rendered so far; each gets its own toggle id.
    spoilers: usize,
}

impl<'d> Renderer<'d> {
    pub fn new(doc: &'d Document, config: &Config, hooks: &'d Hooks) -> Self {
        Self {
            output: String::with_capacity(4096),
            doc,
            hooks,
            with_section: config.with_section,
            target: config.render_target,
            spoilers: 0,
        }
    }

    pub fn render(mut self) -> String {
        let doc = self.doc;
        if self.target == RenderTarget::Article {
            self.output
                .push_str(r#"<article class="md-article" role="document" aria-label="Page content">"#);
        }
        if self.with_section {
            self.sections(&doc.tokens);
        } else {
            self.tokens(&doc.tokens);
        }
        if self.target == RenderTarget::Article {
            self.output.push_str("</article>");
        }
        log::debug!("Rendered {} bytes of HTML", self.output.len());
        self.output
    }

    /// Group top-level tokens into one `<section>` per heading.
    fn sections(&mut self, tokens: &[Token]) {
        let mut start = 0;
        while start < tokens.len() {
            let end = tokens[start + 1..]
                .iter()
                .position(|t| matches!(t, Token::Heading(_)))
                .map_or(tokens.len(), |offset| start + 1 + offset);
            let section = &tokens[start..end];

            match section.iter().find_map(|t| match t {
                Token::Heading(Heading { id: Some(id), .. }) => Some(id),
                _ => None,
            }) {
                Some(id) => self.output.push_str(&format!(
                    r#"<section class="md-section" role="region" aria-labelledby="{}">"#,
                    escape_attr(id)
                )),
                None => self.output.push_str("<section>"),
            }
            self.tokens(section);
            self.output.push_str("</section>");
            start = end;
        }
    }

    fn tokens(&mut self, tokens: &[Token]) {
        for token in tokens {
            self.token(token);
        }
    }

    /// Render `tokens` between an opening and a closing tag.
    fn wrap(&mut self, open: &str, tokens: &[Token], close: &str) {
        self.output.push_str(open);
        self.tokens(tokens);
        self.output.push_str(close);
    }

    fn token(&mut self, token: &Token) {
        let doc = self.doc;
        match token {
            Token::Heading(heading) => self.heading(heading),
            Token::CodeBlock(code) => self.code_block(code),
            Token::Horizontal { .. } => self.output.push_str(r#"<hr class="md-line">"#),
            Token::Paragraph { tokens, .. } => {
                self.wrap(r#"<p class="md-paragraph">"#, tokens, "</p>")
            }
            Token::BlockQuote { tokens } => self.wrap(
                r#"<blockquote class="md-blockquote">"#,
                tokens,
                "</blockquote>",
            ),
            Token::List(list) => self.list(list),
            Token::Table(table) => self.table(table),
            Token::DefinitionList { items } => {
                self.output.push_str(r#"<dl class="md-deflist">"#);
                for item in items {
                    self.wrap(r#"<dt class="md-defterm">"#, &item.term, "</dt>");
                    for definition in &item.definitions {
                        self.wrap(r#"<dd class="md-defdef">"#, definition, "</dd>");
                    }
                }
                self.output.push_str("</dl>");
            }
            Token::Tex(tex) => self.tex(tex),
            Token::Spoiler(spoiler) => self.spoiler(spoiler),
            Token::Include { tokens } => self.tokens(tokens),
            Token::Html { content } => self.output.push_str(content),
            Token::FootnoteEnd => self.footnotes(),

            Token::Text { text } => self.output.push_str(&escape_text(text)),
            Token::Bold { tokens } => self.wrap(r#"<strong class="md-bold">"#, tokens, "</strong>"),
            Token::Italic { tokens } => self.wrap(r#"<em class="md-italic">"#, tokens, "</em>"),
            Token::Underline { tokens } => self.wrap(r#"<u class="md-underline">"#, tokens, "</u>"),
            Token::Strikethrough { tokens } => {
                self.wrap(r#"<del class="md-strikethrough">"#, tokens, "</del>")
            }
            Token::Highlight { tokens } => {
                self.wrap(r#"<mark class="md-highlight">"#, tokens, "</mark>")
            }
            Token::Overline { tokens } => self.wrap(r#"<u class="md-overline">"#, tokens, "</u>"),
            Token::Emoji { name } => self.emoji(name),
            Token::NewLine => self.output.push_str("<br/>"),
            Token::FootnoteRef { reference } => {
                let label = escape_attr(reference);
                let index = doc
                    .footnote_index(reference)
                    .map_or_else(|| label.to_string(), |i| i.to_string());
                self.output.push_str(&format!(
                    r##"<sup id="fnref:{label}"><a class="md-link" href="#fn:{label}">[{index}]</a></sup>"##
                ));
            }
            Token::Image(image) => {
                let title = title_attr(image.title.as_deref());
                self.output.push_str(&format!(
                    r#"<img src="{}" alt="{}" class="md-image"{}>"#,
                    escape_attr(&clean_url(&image.href)),
                    escape_attr(&image.alt),
                    title
                ));
            }
            Token::Link(Link { label, href, title }) => {
                self.anchor(href, title.as_deref(), label);
            }
            Token::RefLink { label, reference } => match doc.reflinks.get(reference) {
                Some(target) => self.anchor(&target.link, target.title.as_deref(), label),
                None => {
                    log::debug!("Reference [{}] is not defined", reference);
                    self.wrap("[", label, "]");
                }
            },
            Token::CodeSpan { text } => self.output.push_str(&format!(
                r#"<code class="md-codespan">{}</code>"#,
                escape_attr(text)
            )),
            Token::Metadata { name, value } => {
                if let Some(value) = doc.metadata.get(name).or(value.as_ref()) {
                    self.output.push_str(&escape_text(value));
                }
            }
            Token::YoutubeEmbed { title, attributes } => {
                let attr = |name: &str| attributes.get(name).map(String::as_str);
                let vid = attr("vid").unwrap_or_default();
                let title = if title.is_empty() { "YouTube" } else { title };
                let mut src = format!("https://www.youtube.com/embed/{}", vid);
                if let Some(start) = attr("start") {
                    src.push_str(&format!("?start={}", start));
                }
                let fullscreen = if attr("allowfullscreen") == Some("false") {
                    ""
                } else {
                    " allowfullscreen"
                };
                self.output.push_str(&format!(
                    r#"<div class="md-youtube"><iframe width="{}" height="{}" src="{}" title="{}" frameborder="0"{}></iframe></div>"#,
                    escape_attr(attr("width").unwrap_or("560")),
                    escape_attr(attr("height").unwrap_or("315")),
                    escape_attr(&clean_url(&src)),
                    escape_attr(title),
                    fullscreen
                ));
            }
        }
    }

    fn heading(&mut self, heading: &Heading) {
        let id = heading
            .id
            .as_deref()
            .map(|id| format!(r#" id="{}""#, escape_attr(id)))
            .unwrap_or_default();
        let class = if heading.is_underline {
            "md-heading md-h-underline"
        } else {
            "md-heading"
        };
        self.output
            .push_str(&format!(r#"<h{}{} class="{}">"#, heading.depth, id, class));
        if !heading.heading_index.is_empty() {
            self.output.push_str(&heading.heading_index);
            self.output.push(' ');
        }
        self.tokens(&heading.tokens);
        self.output.push_str(&format!("</h{}>", heading.depth));
    }

    fn code_block(&mut self, code: &CodeBlock) {
        let lang = code.lang.as_deref().filter(|l| !l.is_empty());
        let highlighted = lang.and_then(|l| self.hooks.highlight(&code.content, l));
        let lang_class = match (lang, &highlighted) {
            (Some(l), Some(_)) => format!(" language-{}", escape_attr(l)),
            _ => String::new(),
        };
        let body = highlighted.unwrap_or_else(|| escape_attr(&code.content).into_owned());

        if code.from.is_some() || code.to.is_some() {
            let first = code.from.unwrap_or(1);
            self.output.push_str(&format!(
                r#"<pre class="md-precode"><code class="md-code{}"><table class="md-code-table"><colgroup><col /><col class="md-table-line-space" /><col /></colgroup><tbody>"#,
                lang_class
            ));
            for (offset, line) in body.split('\n').enumerate() {
                let line = line.strip_suffix('\r').unwrap_or(line);
                self.output.push_str(&format!(
                    r#"<tr class="md-code-row"><td class="md-number-ln">{}</td><td></td><td class="md-code-ln">{}</td></tr>"#,
                    first + offset,
                    line
                ));
            }
            self.output.push_str("</tbody></table></code></pre>");
            return;
        }

        if lang_class.is_empty() && lang == Some("mermaid") {
            self.output
                .push_str(&format!(r#"<pre class="md-mermaid mermaid">{}</pre>"#, body));
            return;
        }
        self.output.push_str(&format!(
            r#"<pre class="md-precode"><code class="md-code{}">{}</code></pre>"#,
            lang_class, body
        ));
    }

    fn list(&mut self, list: &List) {
        let tag = if list.ordered { "ol" } else { "ul" };
        let start = list
            .start_at
            .as_deref()
            .and_then(|digits| digits.parse::<u64>().ok())
            .filter(|&n| list.ordered && n != 1)
            .map(|n| format!(r#" start="{}""#, n))
            .unwrap_or_default();
        self.output
            .push_str(&format!(r#"<{tag} class="md-{tag}list"{start}>"#));
        for item in &list.items {
            self.list_item(item);
        }
        self.output.push_str(&format!("</{tag}>"));
    }

    fn list_item(&mut self, item: &ListItem) {
        if item.task {
            let checked = if item.checked { " checked" } else { "" };
            self.output.push_str(&format!(
                r#"<li class="md-taskitem"><input class="md-checkbox" type="checkbox" disabled{}> "#,
                checked
            ));
        } else {
            self.output.push_str(r#"<li class="md-listitem">"#);
        }
        self.tokens(&item.tokens);
        self.output.push_str("</li>");
    }

    fn table(&mut self, table: &Table) {
        self.output
            .push_str(r#"<table class="md-table" role="table"><thead class="md-thead"><tr class="md-htablerow">"#);
        self.cells(&table.header);
        self.output
            .push_str(r#"</tr></thead><tbody class="md-tbody">"#);
        for row in &table.rows {
            self.output.push_str(r#"<tr class="md-tablerow">"#);
            self.cells(row);
            self.output.push_str("</tr>");
        }
        self.output.push_str("</tbody></table>");
    }

    fn cells(&mut self, cells: &[crate::syntax::Cell]) {
        for cell in cells {
            let tag = if cell.header { "th" } else { "td" };
            let style = cell
                .align
                .as_css()
                .map(|align| format!(r#" style="text-align:{}""#, align))
                .unwrap_or_default();
            self.output
                .push_str(&format!(r#"<{tag} class="md-tablecell"{style}>"#));
            self.tokens(&cell.tokens);
            self.output.push_str(&format!("</{tag}>"));
        }
    }

    fn tex(&mut self, tex: &Tex) {
        if let Some(html) = self.hooks.latex(tex) {
            self.output.push_str(&html);
            return;
        }
        let tag = if tex.inline { "span" } else { "div" };
        let class = if tex.display_mode {
            "md-tex md-tex-display"
        } else {
            "md-tex"
        };
        self.output.push_str(&format!(
            r#"<{tag} class="{class}">{}</{tag}>"#,
            escape_attr(&tex.text)
        ));
    }

    fn spoiler(&mut self, spoiler: &Spoiler) {
        if spoiler.inline {
            self.wrap(
                r#"<label class="md-spoiler"><input class="md-spoiltrigger" type="checkbox" hidden><span class="md-spoilertext">"#,
                &spoiler.tokens,
                "</span></label>",
            );
            return;
        }
        self.spoilers += 1;
        let id = format!("md-spoiler-label-{}", self.spoilers);
        self.output.push_str(&format!(
            r#"<div class="md-spoiler-toggle"><input type="checkbox" id="{id}" hidden><label for="{id}" class="md-spoiler-header">"#
        ));
        self.tokens(&spoiler.title);
        self.wrap(
            r#"</label><div class="md-spoiler-content">"#,
            &spoiler.tokens,
            "</div></div>",
        );
    }

    fn emoji(&mut self, name: &str) {
        let doc = self.doc;
        match doc.emojis.get(name) {
            Some(EmojiRecord::Char { char }) => self.output.push_str(char),
            Some(EmojiRecord::Img {
                url,
                alt,
                width,
                height,
            }) => self.output.push_str(&format!(
                r#"<img alt="{}" src="{}" class="md-emoji-image" width="{}" height="{}">"#,
                escape_attr(alt.as_deref().unwrap_or(name)),
                escape_attr(&clean_url(url)),
                width.unwrap_or(20),
                height.unwrap_or(20)
            )),
            Some(EmojiRecord::Icon { class_name }) => self
                .output
                .push_str(&format!(r#"<i class="{}"></i>"#, escape_attr(class_name))),
            None => match emojis::get_by_shortcode(name) {
                Some(emoji) => self.output.push_str(emoji.as_str()),
                None => self.output.push_str(&format!(":{}:", escape_text(name))),
            },
        }
    }

    fn anchor(&mut self, href: &str, title: Option<&str>, label: &[Token]) {
        let href = clean_url(href);
        let blank = if href.starts_with('#') {
            ""
        } else {
            r#" target="_blank" rel="noopener""#
        };
        self.output.push_str(&format!(
            r#"<a class="md-link" href="{}"{}{}>"#,
            escape_attr(&href),
            title_attr(title),
            blank
        ));
        self.tokens(label);
        self.output.push_str("</a>");
    }

    /// The footnote list, in first-use order.
    fn footnotes(&mut self) {
        let doc = self.doc;
        self.output
            .push_str(r#"<section class="md-footnotes"><ol class="md-fnlist" dir="auto">"#);
        for label in doc.footnote_refs.values() {
            let label_attr = escape_attr(label);
            self.output
                .push_str(&format!(r#"<li class="md-fnitem" id="fn:{}">"#, label_attr));
            match doc.footnote_defs.get(label) {
                Some(tokens) => self.tokens(tokens),
                None => self.output.push_str(&format!("[{}]", escape_text(label))),
            }
            self.output.push_str("</li>");
        }
        self.output.push_str("</ol></section>");
    }
}

fn title_attr(title: Option<&str>) -> String {
    title
        .map(|t| format!(r#" title="{}""#, escape_attr(t)))
        .unwrap_or_default()
}

/// Render `doc` to HTML.
pub fn render(doc: &Document, config: &Config, hooks: &Hooks) -> String {
    Renderer::new(doc, config, hooks).render()
}
