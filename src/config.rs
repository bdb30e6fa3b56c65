//! User settings loaded from ~/.cgscript/config.yaml.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::source::DEFAULT_SCRIPT;

/// Settings file contents. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Program file used when `--script` is not given.
    #[serde(default)]
    pub script: Option<PathBuf>,
    /// TUI theme name.
    #[serde(default)]
    pub theme: Option<String>,
    /// Log filter when `RUST_LOG` is unset (e.g. "info", "cgscript=debug").
    #[serde(default)]
    pub log_level: Option<String>,
    /// Where the TUI writes its log. Without one the TUI does not log.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub show_hearts: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            script: None,
            theme: None,
            log_level: None,
            log_file: None,
            show_hearts: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_yaml::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Directory holding every cgscript user file.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cgscript"))
}

impl Settings {
    /// Load from the standard path (~/.cgscript/config.yaml).
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match config_dir() {
            Some(dir) => {
                let path = dir.join("config.yaml");
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The program file to load, falling back to `game.cgs`.
    pub fn script_path(&self) -> PathBuf {
        self.script
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCRIPT))
    }
}
