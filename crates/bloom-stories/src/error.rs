//! Story errors.

use std::path::PathBuf;

use bloom_core::ConfigError;
use thiserror::Error;

/// Errors raised while loading or reporting a story.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The story file could not be read.
    #[error("Failed to read story {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The story file is not a valid story.
    #[error("Invalid story {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Widget defaults could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
