use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::legacy::DependencyShape;

/// Name of the module config file.
pub const CONFIG_FILENAME: &str = "modkit.json";

/// Engine version sentinel meaning "whatever version the running tool considers current".
pub const ENGINE_VERSION_LATEST: &str = "latest";

/// Config for a single module as loaded from a `modkit.json` file.
///
/// Only contains fields that are set and edited by modkit itself. Decoding
/// goes through the legacy-aware path in [`super::legacy`], so documents
/// written by older tool versions come out in the current shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ModuleConfig {
    /// The name of the module
    pub name: String,

    /// The version of the engine this module was last updated with
    pub engine_version: String,

    /// The SDK this module uses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk: Option<String>,

    /// Paths to explicitly include from the module, relative to the config file
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    /// Paths to explicitly exclude from the module, relative to the config file
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// The modules this module depends on, in declaration order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<ModuleConfigDependency>,

    /// Path, relative to the config file, of the subdir holding the implementation source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Named views: sets of directory filters applicable to directory arguments
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub views: Vec<ModuleConfigView>,

    /// Codegen configuration for this module
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codegen: Option<ModuleCodegenConfig>,
}

/// Fields that only a user (or their editor) sets; never interpreted by modkit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ModuleConfigUserFields {
    /// The self-describing JSON `$schema`
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

/// Module config plus the user-only fields, as shown to a human.
///
/// Serializes as a single flat object with `$schema` first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ModuleConfigWithUserFields {
    #[serde(flatten)]
    pub user_fields: ModuleConfigUserFields,

    #[serde(flatten)]
    pub config: ModuleConfig,
}

/// A dependency declared by a module.
///
/// Accepts both the current object shape and the legacy bare-string shape;
/// see [`DependencyShape`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleConfigDependency {
    /// Name to use for this dependency. Callers default it to the dependency
    /// module's own name when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Source ref of the dependency. Empty when no dependency was recorded.
    pub source: String,

    /// Pinned version of the dependency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

impl ModuleConfigDependency {
    /// Dependency pointing at `source` with no name override or pin.
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// True for the placeholder produced by an absent element.
    pub fn is_placeholder(&self) -> bool {
        self.source.is_empty()
    }
}

impl JsonSchema for ModuleConfigDependency {
    fn schema_name() -> Cow<'static, str> {
        "ModuleConfigDependency".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        DependencyShape::json_schema(generator)
    }
}

/// A named set of directory filter patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ModuleConfigView {
    /// Name the view is selected by
    pub name: String,

    /// Include/exclude patterns, relative to the module source
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
}

/// Codegen preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ModuleCodegenConfig {
    /// Whether to generate a `.gitignore` for the module. Absent means the tool default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_gitignore: Option<bool>,
}
