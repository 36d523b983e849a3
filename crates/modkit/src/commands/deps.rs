//! Deps command
//!
//! Lists the dependencies declared by a module, or looks one up by name.

use anyhow::Context;
use modkit_config::{ModuleConfigDependency, load_module_config};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

use super::{CommandResult, resolve_config_path};

/// JSON output for the deps command
#[derive(Serialize)]
struct DepsOutput<'a> {
    module: &'a str,
    dependencies: Vec<&'a ModuleConfigDependency>,
}

pub fn run_deps(config: Option<PathBuf>, name: Option<String>, json: bool) -> CommandResult {
    let path = resolve_config_path(config)?;
    let module = load_module_config(&path)
        .with_context(|| format!("Failed to load module config: {}", path.display()))?;

    let selected: Vec<&ModuleConfigDependency> = match &name {
        Some(name) => match module.dependency_by_name(name) {
            Some(dep) => vec![dep],
            None => {
                eprintln!("No dependency named '{}' in {}", name, path.display());
                return Ok(Some(1));
            }
        },
        None => module
            .dependencies
            .iter()
            .filter(|dep| !dep.is_placeholder())
            .collect(),
    };

    if json {
        let output = DepsOutput {
            module: &module.name,
            dependencies: selected,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(None);
    }

    if selected.is_empty() {
        println!("{} has no dependencies", module.name);
        return Ok(None);
    }

    for dep in selected {
        let label = dep.name.as_deref().unwrap_or("-");
        match &dep.pin {
            Some(pin) => println!("{}\t{}\t{}", label.cyan(), dep.source, pin.dimmed()),
            None => println!("{}\t{}", label.cyan(), dep.source),
        }
    }

    Ok(None)
}
