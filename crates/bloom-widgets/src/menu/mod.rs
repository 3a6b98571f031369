//! Menu state.
//!
//! [`OpenPathTracker`] decides which submenus are expanded, [`SelectionTracker`]
//! remembers the selected item, and [`MenuState`] composes both with the
//! host's notification callbacks.

mod open_path;
mod selection;
mod state;
mod tree;

pub use open_path::{OpenPathTracker, OpenSet};
pub use selection::SelectionTracker;
pub use state::{MenuListener, MenuState};
pub use tree::{MenuLayout, MenuNode, MenuRow, MenuRowKind};
