//! Configuration handling for wt
//!
//! Settings live in a TOML file at `$WT_CONFIG`, or `wt/config.toml` under the
//! platform config directory. A missing file yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::WtError;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "WT_CONFIG";

/// wt configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Worktree placement
    #[serde(default)]
    pub worktrees: WorktreesConfig,

    /// Interactive picker appearance
    #[serde(default)]
    pub picker: PickerConfig,
}

/// Worktree placement settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorktreesConfig {
    /// Suffix appended to the repository name for the sibling worktrees directory
    #[serde(default = "default_dir_suffix")]
    pub dir_suffix: String,
}

fn default_dir_suffix() -> String {
    "-worktrees".to_string()
}

impl Default for WorktreesConfig {
    fn default() -> Self {
        Self {
            dir_suffix: default_dir_suffix(),
        }
    }
}

/// Picker settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PickerConfig {
    /// Use colors and text styles
    #[serde(default = "default_true")]
    pub color: bool,

    /// Show the path column next to each label
    #[serde(default = "default_true")]
    pub show_paths: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_paths: true,
        }
    }
}

impl Config {
    /// Load from the default location
    pub fn load() -> Result<Self, WtError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`; a missing file gives the defaults
    pub fn load_from(path: &Path) -> Result<Self, WtError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(WtError::Config {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                });
            }
        };
        Self::parse(&content).map_err(|message| WtError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse TOML content
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

/// Resolve the config file location
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("wt").join("config.toml"))
}
