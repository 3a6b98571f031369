//! Headless state engines for Bloom widgets.
//!
//! This crate holds the interaction state behind the widgets:
//! - Menu open paths, selection and render rows
//! - Select dropdown, search and keyboard navigation
//! - Message visibility
//! - Progress metrics and labels
//!
//! Nothing here renders. A view layer owns one engine per mounted widget,
//! forwards user input as method calls and reads the state back to draw.

pub mod menu;
pub mod message;
pub mod progress;
pub mod select;

// Re-export commonly used types
pub use bloom_core::{MenuItemId, MenuMode, MenuTheme};
pub use menu::{
    MenuLayout, MenuListener, MenuNode, MenuRow, MenuRowKind, MenuState, OpenPathTracker,
    OpenSet, SelectionTracker,
};
pub use message::{MessageKind, MessageState};
pub use progress::{CircleGeometry, ProgressKind, ProgressSize, ProgressState, ProgressStatus};
pub use select::{SelectKey, SelectListener, SelectOption, SelectState, SelectTag, SelectValue};
