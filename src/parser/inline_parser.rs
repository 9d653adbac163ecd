//! Character-level inline tokenizer.
//!
//! An [`InlineParser`] scans one block's text left to right, collecting plain
//! characters into a buffer and dispatching on the characters that can open a
//! construct. Spans that need a closing delimiter recurse into
//! [`InlineParser::tokenize`] with a [`Stop`] condition and fall back to
//! literal text when the delimiter never shows up.

use crate::error::Error;
use crate::parser::Lexer;
use crate::syntax::Token;

mod code_spans;
mod emphasis;
mod escapes;
mod inline_math;
pub mod links;
mod marks;
mod raw_inline;
mod shortcodes;
mod spoilers;

use escapes::try_parse_escape;

/// Where a nested scan ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// End of the text.
    End,
    /// The next character is this symbol, line breaks included.
    Symbol(char),
    /// A line break or this symbol.
    Single(char),
    /// A line break or this symbol twice.
    Double(char),
    /// A line break or `!<`.
    SpoilerClose,
}

impl Stop {
    fn matches(self, rest: &str) -> bool {
        match self {
            Stop::End => false,
            Stop::Symbol(c) => rest.starts_with(c),
            Stop::Single(c) => rest.starts_with('\n') || rest.starts_with(c),
            Stop::Double(c) => {
                let mut chars = rest.chars();
                rest.starts_with('\n') || (chars.next() == Some(c) && chars.next() == Some(c))
            }
            Stop::SpoilerClose => rest.starts_with('\n') || rest.starts_with("!<"),
        }
    }
}

pub struct InlineParser<'a, 'h> {
    lexer: &'a mut Lexer<'h>,
    content: String,
    /// Byte offset of the cursor in `content`.
    pos: usize,
    /// Plain text not yet emitted.
    buffer: String,
    /// Number of anchors currently open; links cannot nest in links.
    link_level: i32,
}

impl<'a, 'h> InlineParser<'a, 'h> {
    pub fn new(lexer: &'a mut Lexer<'h>, content: &str, link_level: i32) -> Self {
        Self {
            lexer,
            content: content.to_string(),
            pos: 0,
            buffer: String::new(),
            link_level,
        }
    }

    /// Tokenize the whole text.
    pub fn parse(mut self) -> Result<Vec<Token>, Error> {
        self.tokenize(Stop::End)
    }

    /// Tokenize from the cursor until `stop` or the end of the text.
    ///
    /// The cursor is left on the stop delimiter, which is not consumed.
    pub fn tokenize(&mut self, stop: Stop) -> Result<Vec<Token>, Error> {
        self.lexer.descend()?;
        let result = self.tokenize_inner(stop);
        self.lexer.ascend();
        result
    }

    /// Tokenize a span whose closing delimiter has not been seen yet.
    ///
    /// Running out of nesting depth here means the closer cannot be
    /// reached, so it yields `None` like any other unclosed span.
    fn try_tokenize(&mut self, stop: Stop) -> Result<Option<Vec<Token>>, Error> {
        match self.tokenize(stop) {
            Ok(tokens) => Ok(Some(tokens)),
            Err(Error::NestingLimit { limit }) => {
                log::trace!("Span at byte {} exceeds nesting limit {}", self.pos, limit);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn tokenize_inner(&mut self, stop: Stop) -> Result<Vec<Token>, Error> {
        let mut out = Vec::new();

        while let Some(c) = self.peek() {
            if let Some(escaped) = try_parse_escape(self.rest()) {
                self.buffer.push(escaped);
                self.pos += 1 + escaped.len_utf8();
                continue;
            }
            if stop.matches(self.rest()) {
                break;
            }

            match c {
                '\r' => self.pos += 1,
                '\n' => {
                    self.flush(&mut out);
                    out.push(Token::NewLine);
                    self.pos += 1;
                }
                '{' => self.parse_metadata(&mut out),
                '`' => self.parse_code_span(&mut out),
                '!' => self.parse_bang(&mut out),
                '[' => self.parse_bracket(&mut out)?,
                '$' => self.parse_math(&mut out),
                '<' => self.parse_angle(&mut out),
                '>' => self.parse_inline_spoiler(&mut out)?,
                ':' => self.parse_emoji(&mut out),
                '=' | '~' | '|' | '^' => self.parse_mark(&mut out)?,
                '*' | '_' => self.parse_emphasis(&mut out)?,
                _ => {
                    self.buffer.push(c);
                    self.pos += c.len_utf8();
                }
            }
        }

        self.flush(&mut out);
        Ok(out)
    }

    fn rest(&self) -> &str {
        &self.content[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Length of the run of `symbol` at the cursor, up to `max`.
    fn count_run(&self, symbol: char, max: usize) -> usize {
        self.rest().chars().take(max).take_while(|&c| c == symbol).count()
    }

    /// Emit buffered text as a single text token.
    fn flush(&mut self, out: &mut Vec<Token>) {
        if !self.buffer.is_empty() {
            out.push(Token::text(self.take_buffer()));
        }
    }

    fn take_buffer(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::hooks::Hooks;
    use crate::syntax::{Link, Spoiler, Tex};

    fn inline_with(config: &Config, input: &str) -> Vec<Token> {
        let hooks = Hooks::new();
        let mut lexer = Lexer::new(config, &hooks).unwrap();
        lexer.inline_lex(input).unwrap()
    }

    fn inline(input: &str) -> Vec<Token> {
        inline_with(&Config::default(), input)
    }

    fn text(s: &str) -> Token {
        Token::text(s)
    }

    #[test]
    fn test_plain_text_is_one_token() {
        assert_eq!(inline("just words"), vec![text("just words")]);
        assert_eq!(inline(""), vec![]);
    }

    #[test]
    fn test_newlines() {
        assert_eq!(
            inline("a\r\nb"),
            vec![text("a"), Token::NewLine, text("b")]
        );
    }

    #[test]
    fn test_escapes_are_literal() {
        assert_eq!(inline(r"\*not\* \a"), vec![text(r"*not* \a")]);
    }

    #[test]
    fn test_emphasis_forms() {
        assert_eq!(
            inline("*a* **b** _c_ __d__"),
            vec![
                Token::Italic {
                    tokens: vec![text("a")]
                },
                text(" "),
                Token::Bold {
                    tokens: vec![text("b")]
                },
                text(" "),
                Token::Italic {
                    tokens: vec![text("c")]
                },
                text(" "),
                Token::Underline {
                    tokens: vec![text("d")]
                },
            ]
        );
    }

    #[test]
    fn test_triple_emphasis() {
        assert_eq!(
            inline("***x***"),
            vec![Token::Bold {
                tokens: vec![Token::Italic {
                    tokens: vec![text("x")]
                }]
            }]
        );
        assert_eq!(
            inline("***a* b**"),
            vec![Token::Bold {
                tokens: vec![
                    Token::Italic {
                        tokens: vec![text("a")]
                    },
                    text(" b"),
                ]
            }]
        );
        assert_eq!(
            inline("***a** b*"),
            vec![Token::Italic {
                tokens: vec![
                    Token::Bold {
                        tokens: vec![text("a")]
                    },
                    text(" b"),
                ]
            }]
        );
    }

    #[test]
    fn test_unclosed_emphasis_is_literal() {
        assert_eq!(inline("a * b"), vec![text("a * b")]);
        assert_eq!(inline("**open"), vec![text("**open")]);
        assert_eq!(inline("*a\nb*"), vec![text("*a"), Token::NewLine, text("b*")]);
    }

    #[test]
    fn test_marks() {
        assert_eq!(
            inline("==h== ~~s~~ ^^o^^"),
            vec![
                Token::Highlight {
                    tokens: vec![text("h")]
                },
                text(" "),
                Token::Strikethrough {
                    tokens: vec![text("s")]
                },
                text(" "),
                Token::Overline {
                    tokens: vec![text("o")]
                },
            ]
        );
        assert_eq!(inline("a = b ~ c"), vec![text("a = b ~ c")]);
        assert_eq!(inline("==open"), vec![text("==open")]);
    }

    #[test]
    fn test_inline_spoilers() {
        let spoiler = |s: &str| {
            Token::Spoiler(Spoiler {
                title: vec![],
                inline: true,
                tokens: vec![text(s)],
            })
        };
        assert_eq!(inline("||a||"), vec![spoiler("a")]);
        assert_eq!(inline("x >!b!< y"), vec![text("x "), spoiler("b"), text(" y")]);
        assert_eq!(inline(">!open"), vec![text(">!open")]);
        assert_eq!(inline("a > b"), vec![text("a > b")]);
    }

    #[test]
    fn test_code_span_wins_over_emphasis() {
        assert_eq!(
            inline("`*x*`"),
            vec![Token::CodeSpan {
                text: "*x*".to_string()
            }]
        );
    }

    #[test]
    fn test_math() {
        assert_eq!(
            inline("$x$ and $$y$$"),
            vec![
                Token::Tex(Tex {
                    text: "x".to_string(),
                    inline: true,
                    display_mode: false
                }),
                text(" and "),
                Token::Tex(Tex {
                    text: "y".to_string(),
                    inline: true,
                    display_mode: true
                }),
            ]
        );
        assert_eq!(inline("costs $5"), vec![text("costs $5")]);
    }

    #[test]
    fn test_links() {
        assert_eq!(
            inline(r#"[a *b*](/u "T")"#),
            vec![Token::Link(Link {
                label: vec![
                    text("a "),
                    Token::Italic {
                        tokens: vec![text("b")]
                    }
                ],
                href: "/u".to_string(),
                title: Some("T".to_string()),
            })]
        );
    }

    #[test]
    fn test_links_do_not_nest() {
        let tokens = inline("[a [b](/in)](/out)");
        let [Token::Link(outer)] = tokens.as_slice() else {
            panic!("expected one link, got {tokens:?}");
        };
        assert_eq!(outer.href, "/out");
        assert!(outer.label.iter().all(|t| !matches!(t, Token::Link(_))));
    }

    #[test]
    fn test_reference_links_and_footnotes() {
        assert_eq!(
            inline("[x][y] [^n]"),
            vec![
                Token::RefLink {
                    label: vec![text("x")],
                    reference: "y".to_string()
                },
                text(" "),
                Token::FootnoteRef {
                    reference: "n".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_autolinks_and_html() {
        assert_eq!(
            inline("<https://a.b>"),
            vec![Token::Link(Link {
                label: vec![text("https://a.b")],
                href: "https://a.b".to_string(),
                title: None,
            })]
        );
        assert_eq!(
            inline("<b>x</b>"),
            vec![
                Token::Html {
                    content: "<b>".to_string()
                },
                text("x"),
                Token::Html {
                    content: "</b>".to_string()
                },
            ]
        );
        assert_eq!(inline("1 < 2"), vec![text("1 < 2")]);
    }

    #[test]
    fn test_raw_anchor_blocks_links() {
        let tokens = inline("<a href=\"/x\">[y](/z)</a>");
        assert!(tokens.iter().all(|t| !matches!(t, Token::Link(_))));
        assert!(tokens.contains(&text("[y](/z)")));
    }

    #[test]
    fn test_images_and_embeds() {
        let tokens = inline(r#"![alt *x*](/i.png) !YOUTUBE[V]{vid="id1"} !"#);
        assert_eq!(tokens[0].kind(), "image");
        assert_eq!(tokens[2].kind(), "youtubeEmbed");
        assert_eq!(tokens[3], text(" !"));
    }

    #[test]
    fn test_emoji_requires_known_name() {
        assert_eq!(
            inline(":smile: :nope:"),
            vec![
                Token::Emoji {
                    name: "smile".to_string()
                },
                text(" :nope:"),
            ]
        );
        let config = Config {
            builtin_emojis: false,
            ..Config::default()
        };
        assert_eq!(inline_with(&config, ":smile:"), vec![text(":smile:")]);
    }

    #[test]
    fn test_metadata_lookup() {
        let mut config = Config::default();
        config.metadata.insert("title".to_string(), "Guide".to_string());
        assert_eq!(
            inline_with(&config, "{{title}} {{missing}}"),
            vec![
                Token::Metadata {
                    name: "title".to_string(),
                    value: Some("Guide".to_string())
                },
                text(" "),
                Token::Metadata {
                    name: "missing".to_string(),
                    value: None
                },
            ]
        );
    }

    #[test]
    fn test_nesting_limit_in_link_label_is_an_error() {
        let config = Config {
            max_nesting: 1,
            ..Config::default()
        };
        let hooks = Hooks::new();
        let mut lexer = Lexer::new(&config, &hooks).unwrap();
        assert!(matches!(
            lexer.inline_lex("[a](/b)"),
            Err(Error::NestingLimit { limit: 1 })
        ));
    }

    #[test]
    fn test_emphasis_past_nesting_limit_is_literal() {
        let config = Config {
            max_nesting: 1,
            ..Config::default()
        };
        assert_eq!(inline_with(&config, "*a* ==b=="), vec![text("*a* ==b==")]);
    }

    #[test]
    fn test_deep_emphasis_keeps_all_text() {
        let config = Config {
            max_nesting: 4,
            ..Config::default()
        };
        let tokens = inline_with(&config, "*_*_*_*_x_*_*_*_*");
        assert!(!tokens.is_empty());
    }

    #[test]
    fn test_flat_unclosed_delimiters_stay_text() {
        let input = "a_b*".repeat(40);
        let tokens = inline(&input);
        assert!(!tokens.is_empty());
    }
}
