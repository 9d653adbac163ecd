use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How a custom `:name:` emoji is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EmojiRecord {
    /// A literal character sequence.
    Char { char: String },
    /// An inline image, 20x20 unless sized.
    Img {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
    },
    /// An icon font glyph, `<i class="...">`.
    #[serde(rename = "i")]
    Icon { class_name: String },
}

/// Whether rendered HTML is wrapped in a document-level container.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RenderTarget {
    /// Bare HTML fragment
    #[default]
    Raw,
    /// Wrapped in `<article class="md-article">`
    Article,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Columns per indentation level; a tab counts as a full level.
    pub tab_width: usize,
    /// Maximum depth of nested block scopes and inline spans.
    pub max_nesting: usize,
    /// Seed values for `{{name}}` interpolation; front matter adds to these.
    pub metadata: BTreeMap<String, String>,
    pub emojis: BTreeMap<String, EmojiRecord>,
    /// Fall back to GitHub shortcodes for names missing from `emojis`.
    pub builtin_emojis: bool,
    pub with_section: bool,
    pub render_target: RenderTarget,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: 4,
            max_nesting: 64,
            metadata: BTreeMap::new(),
            emojis: BTreeMap::new(),
            builtin_emojis: true,
            with_section: false,
            render_target: RenderTarget::Raw,
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject values the tokenizers cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_width == 0 {
            return Err(ConfigError::InvalidTabWidth(self.tab_width));
        }
        if self.max_nesting == 0 {
            return Err(ConfigError::InvalidNesting(self.max_nesting));
        }
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn tab_width(mut self, width: usize) -> Self {
        self.config.tab_width = width;
        self
    }

    pub fn max_nesting(mut self, limit: usize) -> Self {
        self.config.max_nesting = limit;
        self
    }

    pub fn metadata(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.metadata.insert(name.into(), value.into());
        self
    }

    pub fn emoji(mut self, name: impl Into<String>, record: EmojiRecord) -> Self {
        self.config.emojis.insert(name.into(), record);
        self
    }

    pub fn builtin_emojis(mut self, enabled: bool) -> Self {
        self.config.builtin_emojis = enabled;
        self
    }

    pub fn with_section(mut self, enabled: bool) -> Self {
        self.config.with_section = enabled;
        self
    }

    pub fn render_target(mut self, target: RenderTarget) -> Self {
        self.config.render_target = target;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

const CANDIDATE_NAMES: &[&str] = &[".mkimp.toml", "mkimp.toml"];

fn parse_config_str(s: &str, path: &Path) -> Result<Config, ConfigError> {
    let config = toml::from_str::<Config>(s).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn user_config_path() -> Option<PathBuf> {
    let p = dirs::config_dir()?.join("mkimp").join("config.toml");
    p.is_file().then_some(p)
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .mkimp.toml, mkimp.toml
/// 3) user config dir: <config_dir>/mkimp/config.toml
/// 4) default config
pub fn load(
    explicit: Option<&Path>,
    start_dir: &Path,
) -> Result<(Config, Option<PathBuf>), ConfigError> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring config: {}", e),
        }
    }

    if let Some(p) = user_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
