//! Open submenu tracking.

use bloom_core::{MenuItemId, MenuMode};
use serde::{Deserialize, Serialize};

/// Ordered set of open submenu ids.
///
/// Insertion order is preserved and an id never appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpenSet(Vec<MenuItemId>);

impl OpenSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check membership.
    pub fn contains(&self, id: &MenuItemId) -> bool {
        self.0.contains(id)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, MenuItemId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[MenuItemId] {
        &self.0
    }

    /// Append an id unless it is already present.
    fn insert(&mut self, id: MenuItemId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Remove an id. Returns whether it was present.
    fn remove(&mut self, id: &MenuItemId) -> bool {
        let before = self.0.len();
        self.0.retain(|open| open != id);
        self.0.len() != before
    }

    fn retain(&mut self, keep: impl FnMut(&MenuItemId) -> bool) {
        self.0.retain(keep);
    }
}

impl<I: Into<MenuItemId>> FromIterator<I> for OpenSet {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut set = OpenSet::new();
        for id in iter {
            set.insert(id.into());
        }
        set
    }
}

impl<'a> IntoIterator for &'a OpenSet {
    type Item = &'a MenuItemId;
    type IntoIter = std::slice::Iter<'a, MenuItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Tracks which submenus of one menu tree are expanded.
///
/// The mode is fixed at construction and selects the closing policy:
/// - Horizontal: toggling a root id collapses the other open roots. Toggling a
///   nested id collapses open entries at its level under other parents.
/// - Vertical and inline: toggling an id collapses its open descendants.
///
/// The toggled id itself always flips, whatever the mode.
#[derive(Debug, Clone)]
pub struct OpenPathTracker {
    mode: MenuMode,
    open: OpenSet,
}

impl OpenPathTracker {
    /// Create a tracker with nothing open.
    pub fn new(mode: MenuMode) -> Self {
        Self {
            mode,
            open: OpenSet::new(),
        }
    }

    /// Create a tracker with some submenus already open.
    ///
    /// Duplicate ids in `open` keep their first position.
    pub fn with_open<I>(mode: MenuMode, open: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MenuItemId>,
    {
        Self {
            mode,
            open: open.into_iter().collect(),
        }
    }

    pub fn mode(&self) -> MenuMode {
        self.mode
    }

    /// Current open set.
    pub fn open_set(&self) -> &OpenSet {
        &self.open
    }

    /// Check if a submenu is expanded.
    pub fn is_open(&self, id: &MenuItemId) -> bool {
        self.open.contains(id)
    }

    /// Flip a submenu and apply the mode's closing policy to the others.
    pub fn toggle(&mut self, id: impl Into<MenuItemId>) -> &OpenSet {
        let id = id.into();
        let before = self.open.len();

        // Closing pass never removes `id` itself.
        if self.mode.is_horizontal() {
            let level = id.level();
            match id.parent() {
                None => self.open.retain(|open| open.level() != 0 || open == &id),
                // Same level under another parent closes; siblings stay.
                Some(parent) => self
                    .open
                    .retain(|open| open.level() != level || open.parent() == Some(parent)),
            }
        } else {
            self.open.retain(|open| !open.is_descendant_of(&id));
        }
        let closed = before - self.open.len();

        let opened = if self.open.remove(&id) {
            false
        } else {
            self.open.insert(id.clone())
        };

        tracing::debug!(
            "toggle {} ({:?}): {} closed alongside, now {}",
            id,
            self.mode,
            closed,
            if opened { "open" } else { "closed" }
        );

        &self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(open: &OpenSet) -> Vec<&str> {
        open.iter().map(MenuItemId::as_str).collect()
    }

    #[test]
    fn test_root_open_from_empty() {
        for mode in [MenuMode::Horizontal, MenuMode::Vertical, MenuMode::Inline] {
            let mut tracker = OpenPathTracker::new(mode);
            assert_eq!(ids(tracker.toggle("1")), vec!["1"]);
        }
    }

    #[test]
    fn test_horizontal_sibling_exclusivity() {
        let mut tracker = OpenPathTracker::with_open(MenuMode::Horizontal, ["1", "2"]);
        assert_eq!(ids(tracker.toggle("3")), vec!["3"]);
    }

    #[test]
    fn test_horizontal_cross_level_independence() {
        let mut tracker = OpenPathTracker::with_open(MenuMode::Horizontal, ["2-1"]);
        assert_eq!(ids(tracker.toggle("3")), vec!["2-1", "3"]);
    }

    #[test]
    fn test_horizontal_closes_other_branches_at_same_level() {
        let mut tracker =
            OpenPathTracker::with_open(MenuMode::Horizontal, ["1", "1-1", "2-1", "1-1-1"]);
        // "2-1" sits at the level of "1-2" under another parent.
        assert_eq!(ids(tracker.toggle("1-2")), vec!["1", "1-1", "1-1-1", "1-2"]);
    }

    #[test]
    fn test_horizontal_nested_toggle_keeps_siblings() {
        let mut tracker = OpenPathTracker::with_open(MenuMode::Horizontal, ["2", "2-2", "3-1"]);
        assert_eq!(ids(tracker.toggle("2-1")), vec!["2", "2-2", "2-1"]);
    }

    #[test]
    fn test_horizontal_close_also_closes_siblings() {
        let mut tracker = OpenPathTracker::with_open(MenuMode::Horizontal, ["1", "2"]);
        assert_eq!(ids(tracker.toggle("1")), Vec::<&str>::new());
    }

    #[test]
    fn test_horizontal_does_not_confuse_numeric_prefixes() {
        let mut tracker = OpenPathTracker::with_open(MenuMode::Horizontal, ["2-1", "20-1"]);
        assert_eq!(ids(tracker.toggle("2-2")), vec!["2-1", "2-2"]);
    }

    #[test]
    fn test_vertical_cascading_close() {
        let mut tracker = OpenPathTracker::with_open(MenuMode::Vertical, ["2", "2-1"]);
        assert!(tracker.toggle("2").is_empty());
    }

    #[test]
    fn test_vertical_keeps_siblings_and_ancestors() {
        let mut tracker =
            OpenPathTracker::with_open(MenuMode::Vertical, ["1", "2", "2-1", "2-1-1", "3-1"]);
        assert_eq!(ids(tracker.toggle("2-1")), vec!["1", "2", "3-1"]);
    }

    #[test]
    fn test_inline_reopen_discards_descendants() {
        // A descendant can be open while its ancestor is closed.
        let mut tracker = OpenPathTracker::with_open(MenuMode::Inline, ["4-1", "4-1-2", "5"]);
        assert_eq!(ids(tracker.toggle("4")), vec!["5", "4"]);
    }

    #[test]
    fn test_vertical_does_not_confuse_numeric_prefixes() {
        let mut tracker = OpenPathTracker::with_open(MenuMode::Vertical, ["2", "20-1"]);
        assert_eq!(ids(tracker.toggle("2")), vec!["20-1"]);
    }

    #[test]
    fn test_toggle_negates_membership() {
        let seeds: [&[&str]; 4] = [&[], &["1"], &["1", "1-1", "2"], &["3-2", "3", "3-2-1"]];
        let targets = ["1", "1-1", "2", "3-2", "9"];

        for mode in [MenuMode::Horizontal, MenuMode::Vertical, MenuMode::Inline] {
            for seed in seeds {
                for target in targets {
                    let mut tracker = OpenPathTracker::with_open(mode, seed.iter().copied());
                    let id = MenuItemId::from(target);
                    let was_open = tracker.is_open(&id);
                    tracker.toggle(id.clone());
                    assert_eq!(tracker.is_open(&id), !was_open, "{mode:?} {seed:?} {target}");
                }
            }
        }
    }

    #[test]
    fn test_double_toggle_restores_unaffected_set() {
        // Sets the closing pass leaves alone come back exactly.
        let cases: [(MenuMode, &[&str], &str); 4] = [
            (MenuMode::Horizontal, &["2-1", "3-1-1"], "1"),
            (MenuMode::Horizontal, &[], "4"),
            (MenuMode::Vertical, &["1", "2-1"], "3"),
            (MenuMode::Inline, &["1-1", "2"], "2-1"),
        ];

        for (mode, seed, target) in cases {
            let mut tracker = OpenPathTracker::with_open(mode, seed.iter().copied());
            let original = tracker.open_set().clone();
            tracker.toggle(target);
            tracker.toggle(target);
            assert_eq!(tracker.open_set(), &original, "{mode:?} {seed:?} {target}");
        }
    }

    #[test]
    fn test_double_toggle_does_not_restore_closed_siblings() {
        let mut tracker = OpenPathTracker::with_open(MenuMode::Horizontal, ["1"]);
        tracker.toggle("2");
        tracker.toggle("2");
        assert!(tracker.open_set().is_empty());
    }

    #[test]
    fn test_unknown_ids_are_accepted() {
        let mut tracker = OpenPathTracker::new(MenuMode::Vertical);
        tracker.toggle("not-in-any-tree");
        assert!(tracker.is_open(&"not-in-any-tree".into()));
    }

    #[test]
    fn test_seed_drops_duplicates() {
        let tracker = OpenPathTracker::with_open(MenuMode::Vertical, ["1", "2", "1"]);
        assert_eq!(ids(tracker.open_set()), vec!["1", "2"]);
    }

    #[test]
    fn test_no_cross_instance_leakage() {
        let mut a = OpenPathTracker::new(MenuMode::Vertical);
        let b = OpenPathTracker::new(MenuMode::Vertical);
        a.toggle("1");
        assert!(a.is_open(&"1".into()));
        assert!(!b.is_open(&"1".into()));
        assert!(b.open_set().is_empty());
    }
}
