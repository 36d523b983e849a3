//! Schema command
//!
//! Prints the JSON Schema for `modkit.json`, or writes it to a file. The
//! schema covers the user-facing document, `$schema` included.

use modkit_config::module_config_schema;
use std::path::PathBuf;

use super::CommandResult;

pub fn run_schema(output: Option<PathBuf>) -> CommandResult {
    let schema = module_config_schema();
    let schema_json = match serde_json::to_string_pretty(&schema) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Failed to serialize schema: {}", e);
            return Ok(Some(1));
        }
    };

    if let Some(path) = output {
        if let Err(e) = std::fs::write(&path, schema_json) {
            eprintln!("Failed to write schema to {:?}: {}", path, e);
            return Ok(Some(1));
        }
    } else {
        println!("{}", schema_json);
    }

    Ok(None)
}
