//! Error types for configuration and parsing.

use std::path::PathBuf;

/// Errors raised while building or loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Tab width must be at least one column.
    InvalidTabWidth(usize),
    /// Nesting limit must allow at least one level.
    InvalidNesting(usize),
    /// Config file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config file is not valid TOML for [`crate::Config`].
    Parse { path: PathBuf, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTabWidth(width) => {
                write!(f, "invalid tab width {}: must be at least 1", width)
            }
            Self::InvalidNesting(limit) => {
                write!(f, "invalid nesting limit {}: must be at least 1", limit)
            }
            Self::Io { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            Self::Parse { path, message } => {
                write!(f, "invalid config {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors returned by [`crate::parse`].
///
/// Malformed markup is never an error; it falls back to literal text.
#[derive(Debug)]
pub enum Error {
    Config(ConfigError),
    /// Block or inline recursion went deeper than the configured limit.
    NestingLimit { limit: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {}", err),
            Self::NestingLimit { limit } => {
                write!(f, "document nesting exceeds the limit of {} levels", limit)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::NestingLimit { .. } => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        std::io::Error::other(err)
    }
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        std::io::Error::other(err)
    }
}
