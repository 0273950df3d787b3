//! # Configuration Persistence
//!
//! Manages selector settings stored in `~/.config/cumulus/selector.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file in
//! the user's XDG config directory. Every field has a default, so a partial
//! file (or none at all) is fine:
//!
//! ```json
//! {
//!   "theme": "Nord",
//!   "list_height": 12,
//!   "min_width": 60,
//!   "max_width": 140
//! }
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use crate::ui::layout::Dimensions;
use crate::ui::theme::Theme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Narrowest box the selector will draw, whatever the config says.
pub const MIN_CONTENT_WIDTH: usize = 40;

/// Persisted selector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The name of the selected theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Number of list rows visible at once.
    #[serde(default = "default_list_height")]
    pub list_height: usize,

    /// Lower clamp for the box's inner width.
    #[serde(default = "default_min_width")]
    pub min_width: usize,

    /// Upper clamp for the box's inner width.
    #[serde(default = "default_max_width")]
    pub max_width: usize,
}

fn default_theme_name() -> String {
    Theme::default_theme().name.to_string()
}

fn default_list_height() -> usize {
    Dimensions::default().list_height
}

fn default_min_width() -> usize {
    Dimensions::default().min_width
}

fn default_max_width() -> usize {
    Dimensions::default().max_width
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            list_height: default_list_height(),
            min_width: default_min_width(),
            max_width: default_max_width(),
        }
    }
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the file
    /// does not exist or cannot be parsed.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_else(|err| {
            tracing::warn!(error = %format!("{err:#}"), "ignoring selector config");
            Self::default()
        })
    }

    /// Try to load configuration, returning an error on failure.
    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the current configuration to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Return the path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "cumulus")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("selector.json"))
    }

    /// Box dimensions with out-of-range values pulled back into range.
    pub fn dimensions(&self) -> Dimensions {
        let min_width = self.min_width.max(MIN_CONTENT_WIDTH);
        Dimensions {
            min_width,
            max_width: self.max_width.max(min_width),
            list_height: self.list_height.max(1),
        }
    }

    /// The configured theme, or the default one if the name is unknown.
    pub fn theme(&self) -> &'static Theme {
        Theme::by_name(&self.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %self.theme, "unknown theme, using default");
            Theme::default_theme()
        })
    }
}
