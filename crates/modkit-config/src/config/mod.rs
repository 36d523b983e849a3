//! Configuration module
//!
//! Decodes `modkit.json` module configs from raw bytes. Reading the bytes is
//! left to the caller (see [`crate::loader`] for the filesystem helpers).

pub mod legacy;
pub mod model;

use crate::error::{ConfigError, Result};
use tracing::trace;

pub use self::legacy::{DependencyEntry, DependencyShape, IMPLICIT_SOURCE};
pub use self::model::*;

/// Decode a module config document.
///
/// A zero-length document (or a JSON `null`) yields the default config.
/// Anything else must be a JSON object; legacy shapes are upgraded on the way in.
pub fn decode_module_config(data: &[u8]) -> Result<ModuleConfig> {
    if is_empty_document(data) {
        return Ok(ModuleConfig::default());
    }
    trace!(len = data.len(), "decoding module config");
    serde_json::from_slice(data).map_err(ConfigError::ModuleConfig)
}

/// Decode a module config document together with the user-only fields.
pub fn decode_module_config_with_user_fields(data: &[u8]) -> Result<ModuleConfigWithUserFields> {
    if is_empty_document(data) {
        return Ok(ModuleConfigWithUserFields::default());
    }
    let user_fields = serde_json::from_slice::<Option<ModuleConfigUserFields>>(data)
        .map_err(ConfigError::ModuleConfig)?
        .unwrap_or_default();
    let config = decode_module_config(data)?;
    Ok(ModuleConfigWithUserFields {
        user_fields,
        config,
    })
}

/// Decode a single `dependencies` element.
///
/// A zero-length element yields a placeholder dependency with an empty source.
pub fn decode_dependency(data: &[u8]) -> Result<ModuleConfigDependency> {
    if is_empty_document(data) {
        return Ok(ModuleConfigDependency::default());
    }
    serde_json::from_slice(data).map_err(ConfigError::Dependency)
}

fn is_empty_document(data: &[u8]) -> bool {
    data.is_empty()
}

impl ModuleConfig {
    /// Decode from raw bytes; see [`decode_module_config`].
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        decode_module_config(data)
    }

    /// First dependency whose name is exactly `name`. An unnamed dependency
    /// matches `""`.
    pub fn dependency_by_name(&self, name: &str) -> Option<&ModuleConfigDependency> {
        self.dependencies
            .iter()
            .find(|dep| dep.name.as_deref().unwrap_or("") == name)
    }

    /// First view whose name is exactly `name`.
    pub fn view_by_name(&self, name: &str) -> Option<&ModuleConfigView> {
        self.views.iter().find(|view| view.name == name)
    }

    /// The configured SDK, if any.
    pub fn sdk(&self) -> Option<&str> {
        self.sdk.as_deref().filter(|s| !s.is_empty())
    }

    /// True when no SDK is configured.
    pub fn is_plain(&self) -> bool {
        self.sdk().is_none()
    }

    /// Explicit `.gitignore` preference, or `None` to use the tool default.
    pub fn automatic_gitignore(&self) -> Option<bool> {
        self.codegen.as_ref().and_then(|c| c.automatic_gitignore)
    }

    /// True when `engineVersion` is the `latest` sentinel.
    pub fn uses_latest_engine(&self) -> bool {
        self.engine_version == ENGINE_VERSION_LATEST
    }

    /// Engine version with the `latest` sentinel replaced by `current`.
    pub fn resolved_engine_version<'a>(&'a self, current: &'a str) -> &'a str {
        if self.uses_latest_engine() {
            current
        } else {
            &self.engine_version
        }
    }
}

impl ModuleConfigWithUserFields {
    /// Decode from raw bytes; see [`decode_module_config_with_user_fields`].
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        decode_module_config_with_user_fields(data)
    }
}
