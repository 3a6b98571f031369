//! Menu tree and render rows.
//!
//! The view layer describes a menu as a tree of [`MenuNode`]s. [`MenuState::rows`]
//! flattens it into [`MenuRow`]s with their depth passed down explicitly, so
//! each row knows its own indentation and state flags.

use bloom_core::{MenuConfig, MenuItemId};
use serde::{Deserialize, Serialize};

use super::state::MenuState;

// =============================================================================
// Tree
// =============================================================================

/// A node of a menu tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MenuNode {
    /// A selectable leaf.
    Item {
        #[serde(default)]
        id: Option<MenuItemId>,
        label: String,
        #[serde(default)]
        disabled: bool,
    },

    /// A header that expands its children when open.
    SubMenu {
        #[serde(default)]
        id: Option<MenuItemId>,
        title: String,
        #[serde(default)]
        disabled: bool,
        #[serde(default)]
        children: Vec<MenuNode>,
    },

    /// A titled section. Children stay at the group's depth.
    Group {
        title: String,
        #[serde(default)]
        children: Vec<MenuNode>,
    },
}

impl MenuNode {
    /// Create an enabled item.
    pub fn item(id: impl Into<MenuItemId>, label: impl Into<String>) -> Self {
        MenuNode::Item {
            id: Some(id.into()),
            label: label.into(),
            disabled: false,
        }
    }

    /// Create an enabled submenu.
    pub fn submenu(
        id: impl Into<MenuItemId>,
        title: impl Into<String>,
        children: Vec<MenuNode>,
    ) -> Self {
        MenuNode::SubMenu {
            id: Some(id.into()),
            title: title.into(),
            disabled: false,
            children,
        }
    }

    /// Create a group.
    pub fn group(title: impl Into<String>, children: Vec<MenuNode>) -> Self {
        MenuNode::Group {
            title: title.into(),
            children,
        }
    }

    /// Mark an item or submenu as disabled. Groups are unaffected.
    pub fn disabled(mut self) -> Self {
        match &mut self {
            MenuNode::Item { disabled, .. } | MenuNode::SubMenu { disabled, .. } => {
                *disabled = true
            }
            MenuNode::Group { .. } => {}
        }
        self
    }

    /// The node's id, if it has one.
    pub fn id(&self) -> Option<&MenuItemId> {
        match self {
            MenuNode::Item { id, .. } | MenuNode::SubMenu { id, .. } => id.as_ref(),
            MenuNode::Group { .. } => None,
        }
    }

    /// Find a node by id anywhere in `nodes`.
    pub fn find<'a>(nodes: &'a [MenuNode], id: &MenuItemId) -> Option<&'a MenuNode> {
        for node in nodes {
            if node.id() == Some(id) {
                return Some(node);
            }
            let children = match node {
                MenuNode::SubMenu { children, .. } | MenuNode::Group { children, .. } => children,
                MenuNode::Item { .. } => continue,
            };
            if let Some(found) = Self::find(children, id) {
                return Some(found);
            }
        }
        None
    }
}

// =============================================================================
// Rows
// =============================================================================

/// Indentation applied to rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    /// Extra padding per depth level, in pixels.
    pub indent_step: u32,

    /// Padding at depth 0, in pixels.
    pub base_indent: u32,
}

impl MenuLayout {
    /// Left padding for a row at `depth`.
    pub fn indent_px(&self, depth: usize) -> u32 {
        depth as u32 * self.indent_step + self.base_indent
    }
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self::from(&MenuConfig::default())
    }
}

impl From<&MenuConfig> for MenuLayout {
    fn from(config: &MenuConfig) -> Self {
        Self {
            indent_step: config.indent_step,
            base_indent: config.base_indent,
        }
    }
}

/// What a row draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuRowKind {
    Item,
    SubMenuTitle,
    GroupTitle,
}

/// A render-ready line of a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuRow {
    pub kind: MenuRowKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<MenuItemId>,
    pub label: String,
    pub depth: usize,
    pub indent_px: u32,
    pub selected: bool,
    pub open: bool,
    pub disabled: bool,
}

impl MenuState {
    /// Flatten a tree into the rows currently visible.
    ///
    /// Children of a submenu appear one level deeper, and only while the
    /// submenu is open.
    pub fn rows(&self, nodes: &[MenuNode], layout: &MenuLayout) -> Vec<MenuRow> {
        let mut rows = Vec::new();
        self.push_rows(nodes, 0, layout, &mut rows);
        rows
    }

    fn push_rows(
        &self,
        nodes: &[MenuNode],
        depth: usize,
        layout: &MenuLayout,
        rows: &mut Vec<MenuRow>,
    ) {
        for node in nodes {
            match node {
                MenuNode::Item {
                    id,
                    label,
                    disabled,
                } => rows.push(MenuRow {
                    kind: MenuRowKind::Item,
                    id: id.clone(),
                    label: label.clone(),
                    depth,
                    indent_px: layout.indent_px(depth),
                    selected: id.as_ref().is_some_and(|id| self.is_selected(id)),
                    open: false,
                    disabled: *disabled,
                }),
                MenuNode::SubMenu {
                    id,
                    title,
                    disabled,
                    children,
                } => {
                    let open = id.as_ref().is_some_and(|id| self.is_open(id));
                    rows.push(MenuRow {
                        kind: MenuRowKind::SubMenuTitle,
                        id: id.clone(),
                        label: title.clone(),
                        depth,
                        indent_px: layout.indent_px(depth),
                        selected: false,
                        open,
                        disabled: *disabled,
                    });
                    if open {
                        self.push_rows(children, depth + 1, layout, rows);
                    }
                }
                MenuNode::Group { title, children } => {
                    rows.push(MenuRow {
                        kind: MenuRowKind::GroupTitle,
                        id: None,
                        label: title.clone(),
                        depth,
                        indent_px: layout.indent_px(depth),
                        selected: false,
                        open: false,
                        disabled: false,
                    });
                    self.push_rows(children, depth, layout, rows);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_core::{MenuMode, MenuTheme};

    fn sample_tree() -> Vec<MenuNode> {
        vec![
            MenuNode::item("1", "Home"),
            MenuNode::submenu(
                "2",
                "Products",
                vec![
                    MenuNode::item("2-1", "Widgets"),
                    MenuNode::submenu("2-2", "Gadgets", vec![MenuNode::item("2-2-1", "Gizmo")]),
                ],
            ),
            MenuNode::group(
                "More",
                vec![MenuNode::item("3", "About"), MenuNode::item("4", "Legacy").disabled()],
            ),
        ]
    }

    fn labels(rows: &[MenuRow]) -> Vec<(&str, usize)> {
        rows.iter().map(|r| (r.label.as_str(), r.depth)).collect()
    }

    #[test]
    fn test_closed_submenus_hide_children() {
        let state = MenuState::new(MenuMode::Vertical, MenuTheme::Light);
        let rows = state.rows(&sample_tree(), &MenuLayout::default());
        assert_eq!(
            labels(&rows),
            vec![
                ("Home", 0),
                ("Products", 0),
                ("More", 0),
                ("About", 0),
                ("Legacy", 0)
            ]
        );
        assert!(rows[4].disabled);
        assert_eq!(rows[2].kind, MenuRowKind::GroupTitle);
    }

    #[test]
    fn test_open_submenus_nest_one_level() {
        let mut state = MenuState::new(MenuMode::Inline, MenuTheme::Light);
        state.toggle_submenu("2");
        state.toggle_submenu("2-2");
        state.select_item("2-2-1");

        let rows = state.rows(&sample_tree(), &MenuLayout::default());
        assert_eq!(
            labels(&rows),
            vec![
                ("Home", 0),
                ("Products", 0),
                ("Widgets", 1),
                ("Gadgets", 1),
                ("Gizmo", 2),
                ("More", 0),
                ("About", 0),
                ("Legacy", 0)
            ]
        );

        let gizmo = &rows[4];
        assert!(gizmo.selected);
        assert_eq!(gizmo.indent_px, 72);
        assert!(rows[1].open);
        assert!(rows[3].open);
    }

    #[test]
    fn test_open_descendant_under_closed_ancestor_stays_hidden() {
        let state = MenuState::new(MenuMode::Vertical, MenuTheme::Light).with_open(["2-2"]);
        let rows = state.rows(&sample_tree(), &MenuLayout::default());
        assert!(rows.iter().all(|r| r.label != "Gizmo"));
    }

    #[test]
    fn test_group_children_keep_depth_inside_submenu() {
        let tree = vec![MenuNode::submenu(
            "1",
            "Settings",
            vec![MenuNode::group("Account", vec![MenuNode::item("1-1", "Profile")])],
        )];
        let state = MenuState::new(MenuMode::Vertical, MenuTheme::Light).with_open(["1"]);
        let rows = state.rows(&tree, &MenuLayout::default());
        assert_eq!(
            labels(&rows),
            vec![("Settings", 0), ("Account", 1), ("Profile", 1)]
        );
        assert_eq!(rows[2].indent_px, 48);
    }

    #[test]
    fn test_custom_layout() {
        let layout = MenuLayout {
            indent_step: 16,
            base_indent: 8,
        };
        assert_eq!(layout.indent_px(0), 8);
        assert_eq!(layout.indent_px(3), 56);
    }

    #[test]
    fn test_find_nested_node() {
        let tree = sample_tree();
        let found = MenuNode::find(&tree, &"2-2-1".into()).unwrap();
        assert_eq!(found, &MenuNode::item("2-2-1", "Gizmo"));
        assert!(MenuNode::find(&tree, &"3".into()).is_some());
        assert!(MenuNode::find(&tree, &"9".into()).is_none());
    }
}
