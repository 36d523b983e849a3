//! Error types for module configuration decoding and loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while decoding or loading a module configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON, is not an object, or a field has the wrong kind
    #[error("unmarshal module config: {0}")]
    ModuleConfig(#[source] serde_json::Error),

    /// A single `dependencies` element could not be decoded
    #[error("unmarshal module config dependency: {0}")]
    Dependency(#[source] serde_json::Error),

    /// The config file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// No config file was found walking up from the start directory
    #[error("no {filename} found in {} or any parent directory", start.display())]
    NotFound {
        /// Directory the search started from
        start: PathBuf,
        /// File name that was searched for
        filename: &'static str,
    },
}

impl ConfigError {
    /// The underlying JSON error, for decode failures.
    pub fn json_error(&self) -> Option<&serde_json::Error> {
        match self {
            ConfigError::ModuleConfig(e) | ConfigError::Dependency(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for module configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
