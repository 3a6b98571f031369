//! Scripted widget stories.
//!
//! A story is a TOML file naming a widget, its initial props and a list of
//! interaction steps. Replaying a story drives the matching state engine from
//! `bloom-widgets` and records a plain-text transcript of every transition.

mod error;
mod replay;
mod story;

pub use error::StoryError;
pub use replay::{replay, Outcome, Snapshot};
pub use story::{
    MenuStep, MenuStory, MessageStep, MessageStory, ProgressStory, SelectStep, SelectStory, Story,
};
