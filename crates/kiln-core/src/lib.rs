//! # Kiln Core
//!
//! Configuration-driven extensibility core for Kiln. Decodes the user
//! configuration document and merges externally declared plugins into the
//! component registries the caller opted into.
//!
//! A typical startup:
//!
//! ```no_run
//! use kiln_core::config::{decode_config, Configuration};
//! use kiln_core::plugin_system::ComponentKind;
//!
//! # fn main() -> kiln_core::Result<()> {
//! let mut config = Configuration::new();
//! config.participate(ComponentKind::Builder);
//! config.participate(ComponentKind::Provisioner);
//!
//! let document = r#"{ "builders": { "cloud-xyz": "/opt/kiln/kiln-builder-cloud-xyz" } }"#;
//! decode_config(document.as_bytes(), &mut config)?;
//! config.load_external_components();
//!
//! let catalog = config.freeze();
//! assert!(catalog.get(ComponentKind::Builder, "cloud-xyz").is_some());
//! # Ok(())
//! # }
//! ```
pub mod config;
pub mod kernel;
pub mod plugin_system;
pub mod utils;

// Re-export key public types for easier use by the binary
pub use config::{Configuration, ConfigError, ConfigFormat};
pub use kernel::error::{Error, Result};
pub use plugin_system::{
    Component, ComponentCatalog, ComponentKind, ComponentRegistry, ExternalPlugin, MergePolicy,
    PluginDiscovery, PluginSystemError,
};

#[cfg(test)]
mod tests;
