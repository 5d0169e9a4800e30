//! # Kiln Core Plugin System
//!
//! Turns raw component declarations into registered, name-addressable
//! components for the three categories Kiln composes: builders,
//! provisioners and post-processors.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`component`]**: [`ComponentKind`] and the plugin binary naming scheme.
//! - **[`traits`]**: the [`Component`] trait every registry entry implements.
//! - **[`handle`]**: [`ExternalPlugin`], the lazy handle to a plugin binary.
//! - **[`registry`]**: [`ComponentRegistry`], one name-keyed map per category.
//! - **[`conflict`]**: [`MergePolicy`] for names that are already registered.
//! - **[`loader`]**: [`ExternalComponentLoader`], which merges declarations into
//!   the registries the caller opted in with.
//! - **[`discovery`]**: [`PluginDiscovery`], which finds plugin binaries in
//!   plugin directories and records them as declarations.
//! - **[`catalog`]**: [`ComponentCatalog`], the frozen read-only result.
//! - **[`error`]**: [`PluginSystemError`].
//!
//! Nothing here starts, executes or inspects a plugin binary. A handle only
//! records where the binary is expected to be.
pub mod catalog;
pub mod component;
pub mod conflict;
pub mod discovery;
pub mod error;
pub mod handle;
pub mod loader;
pub mod registry;
pub mod traits;

pub use catalog::ComponentCatalog;
pub use component::ComponentKind;
pub use conflict::MergePolicy;
pub use discovery::{parse_plugin_file_name, PluginDiscovery};
pub use error::PluginSystemError;
pub use handle::ExternalPlugin;
pub use loader::{CategoryReport, ExternalComponentLoader, LoadReport};
pub use registry::ComponentRegistry;
pub use traits::Component;
// Test module declaration
#[cfg(test)]
mod tests;
