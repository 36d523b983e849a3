//! Compatibility decoding for older `modkit.json` shapes.
//!
//! The format evolved without a version tag, so each record with format
//! history is decoded in two stages: a plain field-by-field mapping into a
//! raw type, then a normalization step that upgrades legacy shapes.
//!
//! Legacy shapes still accepted:
//! - a `dependencies` element given as a bare string: `"github.com/foo/bar"`
//!   decodes as `{ "source": "github.com/foo/bar" }`
//! - `sdk` set without `source`: the source was implicitly the config file's
//!   own directory, so `source` becomes `"."`

use schemars::JsonSchema;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use tracing::debug;

use super::model::{
    ModuleCodegenConfig, ModuleConfig, ModuleConfigDependency, ModuleConfigUserFields,
    ModuleConfigView, ModuleConfigWithUserFields,
};

/// Source directory implied by legacy configs that set an SDK.
pub const IMPLICIT_SOURCE: &str = ".";

// =============================================================================
// ModuleConfig
// =============================================================================

/// Field-by-field mapping of a module config object, before normalization.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawModuleConfig {
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_as_default")]
    engine_version: String,
    sdk: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    include: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    exclude: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    dependencies: Vec<ModuleConfigDependency>,
    source: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    views: Vec<ModuleConfigView>,
    codegen: Option<ModuleCodegenConfig>,
}

impl From<RawModuleConfig> for ModuleConfig {
    fn from(raw: RawModuleConfig) -> Self {
        let sdk = non_empty(raw.sdk);
        let mut source = non_empty(raw.source);

        // An explicit empty source is indistinguishable from a missing one here,
        // so it gets upgraded too.
        if sdk.is_some() && source.is_none() {
            debug!(
                module = %raw.name,
                "sdk set without source, using implicit source {:?}",
                IMPLICIT_SOURCE
            );
            source = Some(IMPLICIT_SOURCE.to_string());
        }

        ModuleConfig {
            name: raw.name,
            engine_version: raw.engine_version,
            sdk,
            include: raw.include,
            exclude: raw.exclude,
            dependencies: raw.dependencies,
            source,
            views: raw.views,
            codegen: raw.codegen,
        }
    }
}

impl<'de> Deserialize<'de> for ModuleConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(ModuleConfigVisitor)
    }
}

struct ModuleConfigVisitor;

impl<'de> Visitor<'de> for ModuleConfigVisitor {
    type Value = ModuleConfig;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a module config object")
    }

    /// `null` decodes like an empty object.
    fn visit_none<E>(self) -> Result<ModuleConfig, E>
    where
        E: de::Error,
    {
        Ok(ModuleConfig::default())
    }

    fn visit_unit<E>(self) -> Result<ModuleConfig, E>
    where
        E: de::Error,
    {
        Ok(ModuleConfig::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<ModuleConfig, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ModuleConfigVisitor)
    }

    fn visit_map<M>(self, map: M) -> Result<ModuleConfig, M::Error>
    where
        M: MapAccess<'de>,
    {
        let raw = RawModuleConfig::deserialize(de::value::MapAccessDeserializer::new(map))?;
        Ok(raw.into())
    }
}

// The user fields and the config are decoded from the same document in two
// passes; `$schema` is not part of ModuleConfig.
impl<'de> Deserialize<'de> for ModuleConfigWithUserFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let user_fields = Option::<ModuleConfigUserFields>::deserialize(&value)
            .map_err(de::Error::custom)?
            .unwrap_or_default();
        let config = ModuleConfig::deserialize(&value).map_err(de::Error::custom)?;
        Ok(ModuleConfigWithUserFields {
            user_fields,
            config,
        })
    }
}

// =============================================================================
// Dependencies
// =============================================================================

/// The shapes a single `dependencies` element may take.
#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
#[schemars(untagged)]
pub enum DependencyShape {
    /// `null`: no dependency recorded
    Absent,
    /// Legacy bare string, the dependency's source ref
    Legacy(String),
    /// Current object shape
    Entry(DependencyEntry),
}

/// Current object shape of a dependency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DependencyEntry {
    /// Name override for the dependency
    pub name: Option<String>,
    /// Source ref of the dependency
    #[serde(deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub source: String,
    /// Pinned version of the dependency
    pub pin: Option<String>,
}

impl From<DependencyShape> for ModuleConfigDependency {
    fn from(shape: DependencyShape) -> Self {
        match shape {
            DependencyShape::Absent => ModuleConfigDependency::default(),
            DependencyShape::Legacy(source) => {
                debug!(%source, "upgrading legacy string dependency");
                ModuleConfigDependency::from_source(source)
            }
            DependencyShape::Entry(entry) => ModuleConfigDependency {
                name: non_empty(entry.name),
                source: entry.source,
                pin: non_empty(entry.pin),
            },
        }
    }
}

impl<'de> Deserialize<'de> for DependencyShape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DependencyShapeVisitor)
    }
}

struct DependencyShapeVisitor;

impl<'de> Visitor<'de> for DependencyShapeVisitor {
    type Value = DependencyShape;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a dependency source string or a dependency object")
    }

    fn visit_unit<E>(self) -> Result<DependencyShape, E>
    where
        E: de::Error,
    {
        Ok(DependencyShape::Absent)
    }

    fn visit_none<E>(self) -> Result<DependencyShape, E>
    where
        E: de::Error,
    {
        Ok(DependencyShape::Absent)
    }

    /// Legacy shape: `"github.com/foo/bar"`
    fn visit_str<E>(self, value: &str) -> Result<DependencyShape, E>
    where
        E: de::Error,
    {
        Ok(DependencyShape::Legacy(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<DependencyShape, E>
    where
        E: de::Error,
    {
        Ok(DependencyShape::Legacy(value))
    }

    /// Current shape: `{ "name": "bar", "source": "github.com/foo/bar", "pin": "v1" }`
    fn visit_map<M>(self, map: M) -> Result<DependencyShape, M::Error>
    where
        M: MapAccess<'de>,
    {
        let entry = DependencyEntry::deserialize(de::value::MapAccessDeserializer::new(map))?;
        Ok(DependencyShape::Entry(entry))
    }
}

impl<'de> Deserialize<'de> for ModuleConfigDependency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        DependencyShape::deserialize(deserializer).map(Into::into)
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Older writers emitted `null` for unset fields; treat it like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
