//! Menu item identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between hierarchy segments of a [`MenuItemId`].
pub const SEPARATOR: char = '-';

/// Caller-assigned identifier of a menu item or submenu.
///
/// Hierarchy is encoded positionally: `"2-1"` is the first child of `"2"`.
/// The id is never validated; any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(String);

impl MenuItemId {
    /// Create an id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the hierarchy segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// Nesting depth. Root items are level 0.
    pub fn level(&self) -> usize {
        self.segments().count() - 1
    }

    /// The id with its last segment removed, or `None` at root level.
    pub fn parent(&self) -> Option<&str> {
        self.0.rsplit_once(SEPARATOR).map(|(parent, _)| parent)
    }

    /// Check if `self` lies anywhere below `ancestor`.
    ///
    /// Matches whole segments only, so `"20-1"` is not below `"2"`.
    pub fn is_descendant_of(&self, ancestor: &MenuItemId) -> bool {
        self.0
            .strip_prefix(ancestor.as_str())
            .is_some_and(|rest| rest.starts_with(SEPARATOR))
    }
}

impl From<String> for MenuItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MenuItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for MenuItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for MenuItemId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MenuItemId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_level() {
        let id = MenuItemId::from("3");
        assert_eq!(id.level(), 0);
        assert_eq!(id.parent(), None);
        assert_eq!(id.segments().collect::<Vec<_>>(), vec!["3"]);
    }

    #[test]
    fn test_nested_level() {
        let id = MenuItemId::from("2-1-4");
        assert_eq!(id.level(), 2);
        assert_eq!(id.parent(), Some("2-1"));
    }

    #[test]
    fn test_descendant_matches_whole_segments() {
        let root = MenuItemId::from("2");
        assert!(MenuItemId::from("2-1").is_descendant_of(&root));
        assert!(MenuItemId::from("2-1-3").is_descendant_of(&root));
        assert!(!MenuItemId::from("20-1").is_descendant_of(&root));
        assert!(!MenuItemId::from("2").is_descendant_of(&root));
        assert!(!MenuItemId::from("1-2").is_descendant_of(&root));
    }

    #[test]
    fn test_parent_matches_whole_segments() {
        assert_eq!(MenuItemId::from("2-2").parent(), Some("2"));
        assert_ne!(MenuItemId::from("20-1").parent(), Some("2"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let id: MenuItemId = toml::Value::String("1-2".into()).try_into().unwrap();
        assert_eq!(id, "1-2");
    }
}
