use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mkimp")]
#[command(author, version)]
#[command(about = "A compiler for an extended Markdown dialect")]
#[command(
    long_about = "mkimp parses an extended Markdown dialect (spoilers, includes, definition \
    lists, math, footnotes, emoji and more) into a document tree and renders it to HTML."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a file to HTML on stdout
    mkimp render notes.md

    # Render from stdin, grouped into sections and wrapped in an article
    cat notes.md | mkimp render --sections --article

    # Inspect the document tree as JSON
    mkimp parse notes.md

CONFIGURATION:

mkimp looks for configuration files in this order:
  1. Explicit --config path
  2. mkimp.toml or .mkimp.toml in the input's directory and its parents
  3. ~/.config/mkimp/config.toml (XDG)
  4. Built-in defaults

Example .mkimp.toml:

    tab_width = 2
    with_section = true

    [metadata]
    site = \"Docs\"

    [emojis.rocket]
    type = \"char\"
    char = \"🚀\"
")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, mkimp will \
        search for .mkimp.toml or mkimp.toml next to the input and in its parents, \
        then fall back to ~/.config/mkimp/config.toml."
    )]
    pub config: Option<PathBuf>,

    /// Columns per indentation level, overriding the config file
    #[arg(long, global = true, env = "MKIMP_TAB_WIDTH")]
    pub tab_width: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the parsed document tree as JSON
    #[command(
        long_about = "Parse a document and print its token tree and side tables \
        (reference links, footnotes, metadata) as pretty-printed JSON."
    )]
    Parse {
        /// Input file (stdin if not provided)
        file: Option<PathBuf>,
    },

    /// Render a document to HTML
    #[command(after_help = "\
EXAMPLES:

    # Render to stdout
    mkimp render notes.md

    # Group content into <section> elements by heading
    mkimp render --sections notes.md")]
    Render {
        /// Input file (stdin if not provided)
        file: Option<PathBuf>,

        /// Group top-level content into one section per heading
        #[arg(long)]
        sections: bool,

        /// Wrap the output in an <article> element
        #[arg(long)]
        article: bool,
    },
}
