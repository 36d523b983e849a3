//! Command implementations for the modkit CLI.
//!
//! Each command returns `Ok(None)` on success or `Ok(Some(code))` to exit
//! with a specific status.

pub mod deps;
pub mod inspect;
pub mod schema;

pub use deps::run_deps;
pub use inspect::run_inspect;
pub use schema::run_schema;

use anyhow::Context;
use modkit_config::find_config;
use std::path::PathBuf;

/// Result of a command: an optional process exit code.
pub type CommandResult = anyhow::Result<Option<u8>>;

/// Use the explicit config path, or discover one from the current directory.
pub fn resolve_config_path(config: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match config {
        Some(path) => Ok(path),
        None => {
            let start_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(find_config(&start_dir)?)
        }
    }
}
