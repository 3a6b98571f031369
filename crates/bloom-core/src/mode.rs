//! Menu mode and theme types.

use serde::{Deserialize, Serialize};

/// Layout mode of a menu.
///
/// Fixed for the lifetime of a menu. It decides which open submenus get
/// collapsed when another one is toggled.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MenuMode {
    /// Top-bar menu. One open root, one open parent per level.
    Horizontal,
    /// Sidebar menu with flyout submenus.
    #[default]
    Vertical,
    /// Sidebar menu with submenus expanded in place.
    Inline,
}

impl MenuMode {
    /// Check if this is the top-bar mode.
    pub fn is_horizontal(self) -> bool {
        matches!(self, MenuMode::Horizontal)
    }

    /// Lowercase name, as written in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuMode::Horizontal => "horizontal",
            MenuMode::Vertical => "vertical",
            MenuMode::Inline => "inline",
        }
    }
}

/// Colour theme of a menu.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MenuTheme {
    #[default]
    Light,
    Dark,
}
