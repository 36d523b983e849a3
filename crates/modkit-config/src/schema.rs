//! JSON Schema for `modkit.json`.

use schemars::{Schema, schema_for};

use crate::config::ModuleConfigWithUserFields;

/// JSON Schema describing the user-facing module config document.
///
/// Dependencies are described with both accepted shapes, so editors do not
/// flag legacy string entries.
pub fn module_config_schema() -> Schema {
    schema_for!(ModuleConfigWithUserFields)
}
