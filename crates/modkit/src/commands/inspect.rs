//! Inspect command
//!
//! Prints a module config in its current, normalized shape. Useful to see
//! how a legacy document is read by this version of the tool.

use anyhow::Context;
use modkit_config::load_module_config_with_user_fields;
use std::path::PathBuf;
use tracing::info;

use super::{CommandResult, resolve_config_path};

pub fn run_inspect(config: Option<PathBuf>, compact: bool) -> CommandResult {
    let path = resolve_config_path(config)?;
    info!(path = %path.display(), "inspecting module config");

    let loaded = load_module_config_with_user_fields(&path)
        .with_context(|| format!("Failed to load module config: {}", path.display()))?;

    let json = if compact {
        serde_json::to_string(&loaded)?
    } else {
        serde_json::to_string_pretty(&loaded)?
    };
    println!("{}", json);

    Ok(None)
}
