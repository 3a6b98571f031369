//! Error types for Bloom.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::WidgetConfig`].
    #[error("Parse error in {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Inline TOML that is not a valid config.
    #[error("Invalid config: {0}")]
    Invalid(String),
}
