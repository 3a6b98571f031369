//! Menu state composed for the view layer.

use std::fmt;

use bloom_core::{MenuConfig, MenuItemId, MenuMode, MenuTheme};

use super::open_path::{OpenPathTracker, OpenSet};
use super::selection::SelectionTracker;
use super::tree::MenuNode;

/// Host callbacks fired after menu state changes.
///
/// Return values are never consulted.
#[cfg_attr(test, mockall::automock)]
pub trait MenuListener {
    /// Called with the new selection after every select.
    fn on_select(&self, id: &MenuItemId);

    /// Called with the new open set after every submenu toggle.
    fn on_open_change(&self, open: &OpenSet);
}

/// State of one mounted menu tree.
///
/// Owns the open-path and selection trackers. The view layer creates one per
/// menu, passes it explicitly to every node it renders, and drops it on
/// unmount.
pub struct MenuState {
    theme: MenuTheme,
    open: OpenPathTracker,
    selection: SelectionTracker,
    listener: Option<Box<dyn MenuListener>>,
}

impl MenuState {
    /// Create a menu with nothing open or selected.
    pub fn new(mode: MenuMode, theme: MenuTheme) -> Self {
        Self {
            theme,
            open: OpenPathTracker::new(mode),
            selection: SelectionTracker::new(),
            listener: None,
        }
    }

    /// Create a menu using configured mode and theme.
    pub fn from_config(config: &MenuConfig) -> Self {
        Self::new(config.mode, config.theme)
    }

    /// Start with an item selected.
    pub fn with_default_selected(mut self, id: impl Into<MenuItemId>) -> Self {
        self.selection = SelectionTracker::with_selected(id);
        self
    }

    /// Start with some submenus open.
    pub fn with_open<I>(mut self, open: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MenuItemId>,
    {
        self.open = OpenPathTracker::with_open(self.open.mode(), open);
        self
    }

    /// Attach host callbacks.
    pub fn with_listener(mut self, listener: Box<dyn MenuListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn mode(&self) -> MenuMode {
        self.open.mode()
    }

    pub fn theme(&self) -> MenuTheme {
        self.theme
    }

    pub fn open_set(&self) -> &OpenSet {
        self.open.open_set()
    }

    pub fn selected(&self) -> Option<&MenuItemId> {
        self.selection.selected()
    }

    pub fn is_open(&self, id: &MenuItemId) -> bool {
        self.open.is_open(id)
    }

    pub fn is_selected(&self, id: &MenuItemId) -> bool {
        self.selection.is_selected(id)
    }

    /// Toggle a submenu and notify the host with the new open set.
    pub fn toggle_submenu(&mut self, id: impl Into<MenuItemId>) -> &OpenSet {
        let open = self.open.toggle(id);
        if let Some(listener) = &self.listener {
            listener.on_open_change(open);
        }
        open
    }

    /// Select an item and notify the host.
    pub fn select_item(&mut self, id: impl Into<MenuItemId>) -> &MenuItemId {
        let selected = self.selection.select(id);
        tracing::debug!("select {}", selected);
        if let Some(listener) = &self.listener {
            listener.on_select(selected);
        }
        selected
    }

    /// Handle a click on a rendered node.
    ///
    /// Items select, submenu headers toggle, groups do nothing. Disabled
    /// nodes and nodes without an id are ignored. Returns whether state
    /// changed.
    pub fn activate(&mut self, node: &MenuNode) -> bool {
        match node {
            MenuNode::Item {
                id: Some(id),
                disabled: false,
                ..
            } => {
                self.select_item(id.clone());
                true
            }
            MenuNode::SubMenu {
                id: Some(id),
                disabled: false,
                ..
            } => {
                self.toggle_submenu(id.clone());
                true
            }
            _ => false,
        }
    }
}

impl fmt::Debug for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuState")
            .field("theme", &self.theme)
            .field("open", &self.open)
            .field("selection", &self.selection)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
