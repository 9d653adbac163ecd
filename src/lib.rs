pub mod config;
pub mod error;
pub mod hooks;
pub mod parser;
pub mod renderer;
pub mod syntax;
mod utils;

pub use config::Config;
pub use config::ConfigBuilder;
pub use config::EmojiRecord;
pub use config::RenderTarget;
pub use error::ConfigError;
pub use error::Error;
pub use hooks::Hooks;
pub use syntax::Document;
pub use syntax::Token;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a document into its token tree and side tables.
///
/// Malformed markup never fails; it is kept as literal text. Errors are
/// limited to an invalid configuration and documents nested deeper than
/// [`Config::max_nesting`].
///
/// # Examples
///
/// ```no_run
/// let doc = mkimp::parse("# Title\n\nSome *text*.", None).unwrap();
/// assert_eq!(doc.tokens.len(), 2);
/// ```
///
/// # Arguments
///
/// * `input` - The document text
/// * `config` - Optional configuration (defaults to default config)
pub fn parse(input: &str, config: Option<Config>) -> Result<Document, Error> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    parse_with(input, &config, &Hooks::new())
}

/// Parses a document with front matter, include and other collaborators.
pub fn parse_with(input: &str, config: &Config, hooks: &Hooks) -> Result<Document, Error> {
    parser::parse_document(input, config, hooks)
}

/// Renders a parsed document to HTML.
pub fn render(doc: &Document, config: &Config, hooks: &Hooks) -> String {
    renderer::render(doc, config, hooks)
}

/// Parses and renders `input` in one step, without hooks.
pub fn to_html(input: &str, config: Option<Config>) -> Result<String, Error> {
    let config = config.unwrap_or_default();
    let doc = parse(input, Some(config.clone()))?;
    Ok(render(&doc, &config, &Hooks::new()))
}
