//! Locating and reading `modkit.json` from disk.
//!
//! Thin wrappers over the decoders in [`crate::config`]; the decoders
//! themselves never touch the filesystem.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{
    CONFIG_FILENAME, ModuleConfig, ModuleConfigWithUserFields, decode_module_config,
    decode_module_config_with_user_fields,
};
use crate::error::{ConfigError, Result};

/// Walk up the directory tree from `start_dir` to find `modkit.json`
pub fn discover_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "found module config");
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Like [`discover_config`], but a miss is an error.
pub fn find_config(start_dir: &Path) -> Result<PathBuf> {
    discover_config(start_dir).ok_or_else(|| ConfigError::NotFound {
        start: start_dir.to_path_buf(),
        filename: CONFIG_FILENAME,
    })
}

/// Read and decode the module config at `path`.
pub fn load_module_config(path: &Path) -> Result<ModuleConfig> {
    decode_module_config(&read(path)?)
}

/// Read and decode the module config at `path`, keeping user-only fields.
pub fn load_module_config_with_user_fields(path: &Path) -> Result<ModuleConfigWithUserFields> {
    decode_module_config_with_user_fields(&read(path)?)
}

fn read(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
