//! Selected menu item.

use bloom_core::MenuItemId;

/// Holds the single selected item of a menu. Last write wins.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    selected: Option<MenuItemId>,
}

impl SelectionTracker {
    /// Create a tracker with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker with a default selection.
    pub fn with_selected(id: impl Into<MenuItemId>) -> Self {
        Self {
            selected: Some(id.into()),
        }
    }

    /// Overwrite the selection. No validation is done.
    pub fn select(&mut self, id: impl Into<MenuItemId>) -> &MenuItemId {
        self.selected.insert(id.into())
    }

    pub fn selected(&self) -> Option<&MenuItemId> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &MenuItemId) -> bool {
        self.selected.as_ref() == Some(id)
    }
}
