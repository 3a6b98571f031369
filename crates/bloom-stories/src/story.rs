//! Story file format.
//!
//! ```toml
//! widget = "menu"
//! name = "top bar"
//! mode = "horizontal"
//! steps = [{ toggle = "2" }, { activate = "2-1" }]
//!
//! [[tree]]
//! kind = "submenu"
//! id = "2"
//! title = "Products"
//! children = [{ kind = "item", id = "2-1", label = "Widgets" }]
//! ```

use std::path::Path;

use bloom_core::{MenuItemId, MenuMode, MenuTheme};
use bloom_widgets::{
    MenuNode, MessageKind, ProgressKind, ProgressSize, ProgressStatus, SelectKey, SelectOption,
};
use serde::Deserialize;

use crate::error::StoryError;

/// A scripted interaction with one widget.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "widget", rename_all = "lowercase")]
pub enum Story {
    Menu(MenuStory),
    Select(SelectStory),
    Message(MessageStory),
    Progress(ProgressStory),
}

impl Story {
    /// Load a story file.
    pub fn load(path: &Path) -> Result<Self, StoryError> {
        let contents = std::fs::read_to_string(path).map_err(|source| StoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Parse story TOML. `path` is only used for error reporting.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, StoryError> {
        toml::from_str(contents).map_err(|e| StoryError::Parse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Story::Menu(story) => &story.name,
            Story::Select(story) => &story.name,
            Story::Message(story) => &story.name,
            Story::Progress(story) => &story.name,
        }
    }
}

// =============================================================================
// Menu
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct MenuStory {
    #[serde(default)]
    pub name: String,

    /// Falls back to the configured mode.
    pub mode: Option<MenuMode>,

    /// Falls back to the configured theme.
    pub theme: Option<MenuTheme>,

    pub default_selected: Option<MenuItemId>,

    #[serde(default)]
    pub default_open: Vec<MenuItemId>,

    #[serde(default)]
    pub tree: Vec<MenuNode>,

    #[serde(default)]
    pub steps: Vec<MenuStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuStep {
    /// Toggle a submenu directly by id.
    Toggle(MenuItemId),
    /// Select an item directly by id.
    Select(MenuItemId),
    /// Click the node with this id in the tree.
    Activate(MenuItemId),
}

// =============================================================================
// Select
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SelectStory {
    #[serde(default)]
    pub name: String,

    pub options: Vec<SelectOption>,

    #[serde(default)]
    pub multiple: bool,

    #[serde(default)]
    pub searchable: bool,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default)]
    pub allow_clear: bool,

    pub max_tag_count: Option<usize>,

    #[serde(default)]
    pub default: Vec<String>,

    #[serde(default)]
    pub steps: Vec<SelectStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectStep {
    Click,
    ClickOutside,
    Search(String),
    Key(SelectKey),
    Choose(String),
    Clear,
}

// =============================================================================
// Message
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct MessageStory {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub kind: MessageKind,

    pub content: String,

    #[serde(default)]
    pub closable: bool,

    #[serde(default)]
    pub steps: Vec<MessageStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStep {
    Close,
}

// =============================================================================
// Progress
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ProgressStory {
    #[serde(default)]
    pub name: String,

    pub percent: f64,

    #[serde(default)]
    pub kind: ProgressKind,

    #[serde(default)]
    pub size: ProgressSize,

    #[serde(default)]
    pub status: ProgressStatus,

    pub success_percent: Option<f64>,

    pub stroke_color: Option<String>,

    #[serde(default = "default_show_info")]
    pub show_info: bool,
}

fn default_show_info() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_menu_story() {
        let story = Story::parse(
            r#"
            widget = "menu"
            name = "sidebar"
            mode = "inline"
            steps = [{ toggle = "1" }, { select = "1-1" }, { activate = "1" }]

            [[tree]]
            kind = "submenu"
            id = "1"
            title = "Settings"
            children = [{ kind = "item", id = "1-1", label = "Profile" }]
            "#,
            Path::new("sidebar.toml"),
        )
        .unwrap();

        let Story::Menu(menu) = story else {
            panic!("expected a menu story");
        };
        assert_eq!(menu.name, "sidebar");
        assert_eq!(menu.mode, Some(MenuMode::Inline));
        assert_eq!(menu.tree.len(), 1);
        assert_eq!(
            menu.steps,
            vec![
                MenuStep::Toggle("1".into()),
                MenuStep::Select("1-1".into()),
                MenuStep::Activate("1".into()),
            ]
        );
    }

    #[test]
    fn test_parse_select_story() {
        let story = Story::parse(
            r#"
            widget = "select"
            multiple = true
            options = [
                { value = "a", label = "Apple" },
                { value = "b", label = "Banana", disabled = true },
            ]
            steps = ["click", { key = "down" }, { search = "app" }, "clear", "click_outside"]
            "#,
            Path::new("select.toml"),
        )
        .unwrap();

        let Story::Select(select) = story else {
            panic!("expected a select story");
        };
        assert!(select.multiple);
        assert!(select.options[1].disabled);
        assert_eq!(
            select.steps,
            vec![
                SelectStep::Click,
                SelectStep::Key(SelectKey::Down),
                SelectStep::Search("app".to_string()),
                SelectStep::Clear,
                SelectStep::ClickOutside,
            ]
        );
    }

    #[test]
    fn test_unknown_widget_is_a_parse_error() {
        let err = Story::parse("widget = \"card\"\n", Path::new("card.toml")).unwrap_err();
        assert!(matches!(err, StoryError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Story::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, StoryError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "widget = \"message\"\ncontent = \"Saved\"\nsteps = [\"close\"]").unwrap();

        let story = Story::load(file.path()).unwrap();
        assert!(matches!(story, Story::Message(ref m) if m.steps == vec![MessageStep::Close]));
    }
}
