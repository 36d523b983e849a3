//! Module configuration for modkit.
//!
//! Declares the `modkit.json` schema and decodes it from raw bytes, upgrading
//! documents written by older tool versions to the current shape.

pub mod config;
pub mod error;
pub mod loader;
pub mod schema;

pub use config::*;
pub use error::{ConfigError, Result};
pub use loader::{
    discover_config, find_config, load_module_config, load_module_config_with_user_fields,
};
pub use schema::module_config_schema;
