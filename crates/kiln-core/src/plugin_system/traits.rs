use std::fmt::Debug;
use std::path::Path;

use crate::plugin_system::component::ComponentKind;

/// A named component that can sit in a [`ComponentRegistry`](crate::plugin_system::ComponentRegistry).
///
/// Built-in components are implemented by the embedding tool and registered
/// before loading. External plugins are represented by
/// [`ExternalPlugin`](crate::plugin_system::ExternalPlugin) handles.
/// Registries are shared across worker threads once frozen, hence the
/// `Send + Sync` bound.
pub trait Component: Send + Sync + Debug {
    /// Name the component is registered and looked up under
    fn name(&self) -> &str;

    /// Category the component belongs to
    fn kind(&self) -> ComponentKind;

    /// Executable backing this component, `None` for built-ins
    fn executable(&self) -> Option<&Path> {
        None
    }

    /// Whether this component is provided by an external plugin binary
    fn is_external(&self) -> bool {
        self.executable().is_some()
    }
}
