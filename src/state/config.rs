use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};
use crate::graph::color::ColorMode;
use crate::graph::filter::CommitFilter;

const CONFIG_DIR: &str = "commit-graph";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub layout: LayoutSettings,
    pub theme: Theme,
    /// Filters applied when the caller supplies none
    pub default_filter: CommitFilter,
    pub cache_capacity: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Node spacing: `x = column * column_width + column_offset`,
/// `y = row * row_height + row_offset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub column_width: f32,
    pub column_offset: f32,
    pub row_height: f32,
    pub row_offset: f32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            layout: LayoutSettings::default(),
            theme: Theme::Light,
            default_filter: CommitFilter::default(),
            cache_capacity: 8,
        }
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            column_width: 40.0,
            column_offset: 20.0,
            row_height: 50.0,
            row_offset: 30.0,
        }
    }
}

impl From<Theme> for ColorMode {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => ColorMode::Light,
            Theme::Dark => ColorMode::Dark,
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<()> {
        let spacing = [
            ("column_width", self.column_width),
            ("row_height", self.row_height),
        ];
        for (setting, value) in spacing {
            if !value.is_finite() || value <= 0.0 {
                return Err(GraphError::configuration(
                    setting,
                    format!("must be a positive number, got {}", value),
                ));
            }
        }

        let offsets = [
            ("column_offset", self.column_offset),
            ("row_offset", self.row_offset),
        ];
        for (setting, value) in offsets {
            if !value.is_finite() {
                return Err(GraphError::configuration(setting, "must be finite"));
            }
        }

        Ok(())
    }
}

impl GraphConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from the user config directory, falling back to defaults.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if let Ok(config) = Self::load_from(&config_path) {
                return config;
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::config_path() {
            self.save_to(&config_path)?;
        }
        Ok(())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GraphConfig = serde_json::from_str(&content)?;
        config.layout.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn color_mode(&self) -> ColorMode {
        self.theme.into()
    }
}
