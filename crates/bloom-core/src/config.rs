//! Configuration types.
//!
//! Widget defaults live in `widgets.toml` under the Bloom config directory.
//! Every field is optional; a missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::mode::{MenuMode, MenuTheme};

/// Defaults applied to every widget the view layer builds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Menu defaults
    pub menu: MenuConfig,

    /// Select defaults
    pub select: SelectConfig,

    /// Progress defaults
    pub progress: ProgressConfig,
}

/// Menu defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub mode: MenuMode,
    pub theme: MenuTheme,

    /// Extra left padding per nesting level, in pixels.
    pub indent_step: u32,

    /// Left padding of root-level rows, in pixels.
    pub base_indent: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            mode: MenuMode::default(),
            theme: MenuTheme::default(),
            indent_step: 24,
            base_indent: 24,
        }
    }
}

/// Select defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Text shown while nothing is selected.
    pub placeholder: String,

    /// Text shown when no option matches the search.
    pub empty_text: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            placeholder: "Please select".to_string(),
            empty_text: "No data".to_string(),
        }
    }
}

/// Progress defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Bar colour while the status is normal or active.
    pub stroke_color: String,

    /// Metrics for the default size.
    #[serde(rename = "default")]
    pub default_size: SizeMetrics,

    /// Metrics for the small size.
    #[serde(rename = "small")]
    pub small_size: SizeMetrics,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            stroke_color: "#1890ff".to_string(),
            default_size: SizeMetrics {
                stroke_width: 10,
                line_length: 200,
                border_radius: 10,
            },
            small_size: SizeMetrics {
                stroke_width: 8,
                line_length: 150,
                border_radius: 10,
            },
        }
    }
}

/// Pixel metrics of a progress bar size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeMetrics {
    pub stroke_width: u32,
    pub line_length: u32,
    pub border_radius: u32,
}

impl WidgetConfig {
    /// Load `widgets.toml` from the config directory.
    ///
    /// Returns defaults when there is no config directory or no file.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load a config file, falling back to defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Parse a config from an inline TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Invalid(e.message().to_string()))
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("bloom"))
}

/// Get the path to widgets.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("widgets.toml"))
}
