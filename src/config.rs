use crate::cli::CliArgs;
use crate::editor::DEFAULT_TARGET;
use crate::history::DEFAULT_UNDO_CAPACITY;
use crate::save_log::FileSaveLog;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config format: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Contents of `nano.toml`
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct NanoConfig {
    pub undo_limit: Option<usize>,
    pub line_numbers: Option<bool>,
    pub history_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl NanoConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/wilx/nano.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wilx").join("nano.toml"))
    }

    /// Load an explicitly requested file, or the default one if it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }
}

/// Final settings after command-line flags override the config file
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub file: PathBuf,
    pub line_numbers: bool,
    pub undo_limit: usize,
    /// Where saves are recorded; `None` disables the record
    pub history_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(args: &CliArgs, config: &NanoConfig) -> Self {
        let history_file = if args.no_history {
            None
        } else {
            args.history_file
                .clone()
                .or_else(|| config.history_file.clone())
                .map(expand_home)
                .or_else(FileSaveLog::default_location)
        };

        Self {
            file: args
                .file
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET)),
            line_numbers: args.line_numbers || config.line_numbers.unwrap_or(false),
            undo_limit: args
                .undo_limit
                .or(config.undo_limit)
                .unwrap_or(DEFAULT_UNDO_CAPACITY),
            history_file,
            log_file: args
                .log_file
                .clone()
                .or_else(|| config.log_file.clone())
                .map(expand_home),
        }
    }
}

/// Replace a leading `~` component with the home directory
fn expand_home(path: PathBuf) -> PathBuf {
    if !path.starts_with("~") {
        return path;
    }
    let rest = path
        .strip_prefix("~")
        .map(Path::to_path_buf)
        .unwrap_or_default();
    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path,
    }
}
