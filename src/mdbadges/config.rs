//! # Configuration
//!
//! Optional `config.json` in the OS config directory (via `directories`), e.g.
//! `~/.config/mdbadges/config.json` on Linux. The directory can be pointed
//! elsewhere with `MDBADGES_CONFIG_DIR`. The file is only ever read; a missing
//! file means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_style` | none | Style applied when `--style` is not given |
//! | `html` | `false` | Print HTML instead of Markdown by default |
//! | `suggestion_limit` | `5` | Maximum "did you mean" entries |
//! | `suggestion_threshold` | `0.5` | Minimum similarity for a suggestion |
//!
//! `MDBADGES_STYLE` overrides `default_style`. The style is not checked here:
//! an unknown one reaches the formatter, which drops it with a warning.

use crate::error::{BadgeError, Result};
use crate::suggest::{DEFAULT_LIMIT, DEFAULT_THRESHOLD};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
pub const CONFIG_DIR_ENV: &str = "MDBADGES_CONFIG_DIR";
pub const STYLE_ENV: &str = "MDBADGES_STYLE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MdbConfig {
    #[serde(default)]
    pub default_style: Option<String>,

    #[serde(default)]
    pub html: bool,

    #[serde(default = "default_limit")]
    pub suggestion_limit: usize,

    #[serde(default = "default_threshold")]
    pub suggestion_threshold: f64,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for MdbConfig {
    fn default() -> Self {
        Self {
            default_style: None,
            html: false,
            suggestion_limit: DEFAULT_LIMIT,
            suggestion_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl MdbConfig {
    /// Directory the config file is read from.
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Some(PathBuf::from(dir));
        }
        ProjectDirs::from("com", "inttter", "mdbadges").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads from the standard location and applies environment overrides.
    pub fn load_default() -> Result<Self> {
        let mut config = match Self::config_dir() {
            Some(dir) => Self::load(dir)?,
            None => Self::default(),
        };
        if let Ok(style) = std::env::var(STYLE_ENV) {
            config.default_style = Some(style);
        }
        config.validate()?;
        Ok(config)
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: MdbConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.suggestion_threshold) {
            return Err(BadgeError::InvalidInput(format!(
                "suggestion_threshold must be between 0 and 1, got {}",
                self.suggestion_threshold
            )));
        }
        Ok(())
    }

    /// Key/value pairs for display, in a stable order.
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "default_style",
                self.default_style.clone().unwrap_or_else(|| "(none)".into()),
            ),
            ("html", self.html.to_string()),
            ("suggestion_limit", self.suggestion_limit.to_string()),
            ("suggestion_threshold", self.suggestion_threshold.to_string()),
        ]
    }
}
