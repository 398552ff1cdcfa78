//! User configuration.
//!
//! Read once at startup from `config.json` in the platform config directory
//! (`~/.config/dotwiz/` on Linux). Every field has a default, so a missing or
//! partial file is fine:
//!
//! - `user` keys the favorites store
//! - `theme` is the theme installed last, preselected on the theme screen
//! - `setup_script` and `shell` make up the install command
//!
//! `DOTWIZ_SCRIPT` replaces `setup_script` for one run without touching the
//! file. The only write is [`Config::save_theme`] after a successful install.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Identity used when no user is configured.
pub const DEFAULT_USER: &str = "default";

/// Environment variable overriding the setup script path.
pub const SCRIPT_ENV_VAR: &str = "DOTWIZ_SCRIPT";

/// Contents of `config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_user")]
    pub user: String,

    /// Id of the last installed theme (must match a built-in theme id).
    #[serde(default)]
    pub theme: Option<String>,

    #[serde(default = "default_setup_script")]
    pub setup_script: PathBuf,

    #[serde(default = "default_shell")]
    pub shell: String,
}

fn default_user() -> String {
    DEFAULT_USER.to_string()
}

fn default_setup_script() -> PathBuf {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().join(".dotfiles").join("install.sh"))
        .unwrap_or_else(|| PathBuf::from("install.sh"))
}

fn default_shell() -> String {
    "bash".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: default_user(),
            theme: None,
            setup_script: default_setup_script(),
            shell: default_shell(),
        }
    }
}

impl Config {
    /// The effective configuration: file values (or defaults when the file
    /// is unusable) with the environment override applied.
    pub fn load() -> Self {
        let mut config = Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_else(|e| {
                tracing::warn!("using default configuration: {:#}", e);
                Self::default()
            });
        if let Ok(script) = std::env::var(SCRIPT_ENV_VAR) {
            if !script.is_empty() {
                config.setup_script = PathBuf::from(script);
            }
        }
        config
    }

    /// Read `path`. A missing file yields the defaults; unreadable or invalid
    /// JSON is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| format!("Cannot create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("Cannot serialize config")?;
        fs::write(path, json).with_context(|| format!("Cannot write {}", path.display()))
    }

    /// Record `theme` as the installed theme, keeping every other field as
    /// it is on disk (environment overrides are not written back).
    pub fn save_theme(theme: &str) -> Result<()> {
        let path = Self::config_path()?;
        Self::save_theme_to(&path, theme)
    }

    pub fn save_theme_to(path: &Path, theme: &str) -> Result<()> {
        let mut config = Self::load_from(path)?;
        config.theme = Some(theme.to_string());
        config.save_to(path)
    }

    /// The identity keying the favorites store. Blank values fall back to
    /// [`DEFAULT_USER`].
    pub fn current_user(&self) -> &str {
        let user = self.user.trim();
        if user.is_empty() {
            DEFAULT_USER
        } else {
            user
        }
    }

    fn config_path() -> Result<PathBuf> {
        directories::ProjectDirs::from("", "", "dotwiz")
            .map(|dirs| dirs.config_dir().join("config.json"))
            .context("No home directory to keep config in")
    }
}
