use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use mkimp::config::RenderTarget;
use mkimp::{Config, Hooks};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

/// Lines `from..=to` (1-based) of `text`.
fn slice_lines(text: &str, from: Option<usize>, to: Option<usize>) -> String {
    let from = from.unwrap_or(1).max(1);
    let lines: Vec<&str> = text.lines().collect();
    let to = to.unwrap_or(lines.len()).min(lines.len());
    if from > to {
        return String::new();
    }
    lines[from - 1..to].join("\n")
}

fn read_relative(
    base: &Path,
    location: &str,
    from: Option<usize>,
    to: Option<usize>,
) -> Option<String> {
    let path = base.join(location);
    match fs::read_to_string(&path) {
        Ok(text) => Some(slice_lines(&text, from, to)),
        Err(e) => {
            log::warn!("Cannot include {}: {}", path.display(), e);
            None
        }
    }
}

/// Hooks that resolve includes against `base`.
fn file_hooks(base: PathBuf) -> Hooks {
    let code_base = base.clone();
    let resolve_base = base.clone();
    Hooks::new()
        .with_resolve(move |location| {
            let path = resolve_base.join(location);
            fs::canonicalize(&path)
                .unwrap_or(path)
                .to_string_lossy()
                .into_owned()
        })
        .with_include(move |location, from, to| read_relative(&base, location, from, to))
        .with_include_code(move |location, from, to| read_relative(&code_base, location, from, to))
}

fn load_config(cli: &Cli, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (mut cfg, cfg_path) = mkimp::config::load(cli.config.as_deref(), &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    if let Some(width) = cli.tab_width {
        cfg.tab_width = width;
        cfg.validate()?;
    }
    Ok(cfg)
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Parse { file } => {
            let cfg = load_config(&cli, file)?;
            let hooks = file_hooks(start_dir_for(file)?);
            let input = read_all(file.as_ref())?;
            let doc = mkimp::parse_with(&input, &cfg, &hooks)?;
            let json = serde_json::to_string_pretty(&doc).map_err(io::Error::other)?;
            println!("{json}");
            Ok(())
        }
        Commands::Render {
            file,
            sections,
            article,
        } => {
            let mut cfg = load_config(&cli, file)?;
            if *sections {
                cfg.with_section = true;
            }
            if *article {
                cfg.render_target = RenderTarget::Article;
            }
            let hooks = file_hooks(start_dir_for(file)?);
            let input = read_all(file.as_ref())?;
            let doc = mkimp::parse_with(&input, &cfg, &hooks)?;
            println!("{}", mkimp::render(&doc, &cfg, &hooks));
            Ok(())
        }
    }
}
