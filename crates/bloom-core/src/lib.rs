//! Core types for the Bloom widget library.
//!
//! This crate contains shared data structures used across all Bloom crates:
//! - Menu item identifiers and their positional hierarchy
//! - Menu modes and themes
//! - Widget configuration
//! - Error types

mod config;
mod error;
mod item;
mod mode;

pub use config::{
    config_dir, config_path, MenuConfig, ProgressConfig, SelectConfig, SizeMetrics, WidgetConfig,
};
pub use error::ConfigError;
pub use item::{MenuItemId, SEPARATOR};
pub use mode::{MenuMode, MenuTheme};
