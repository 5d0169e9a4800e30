use std::path::{Path, PathBuf};

use crate::plugin_system::component::ComponentKind;
use crate::plugin_system::traits::Component;

/// Lazy handle to an external plugin binary.
///
/// Creating a handle never touches the filesystem. Whether `path` exists or is
/// executable only matters once the orchestrator starts the plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalPlugin {
    name: String,
    kind: ComponentKind,
    path: PathBuf,
}

impl ExternalPlugin {
    pub fn new(kind: ComponentKind, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            kind,
            path: path.into(),
        }
    }

    /// Path of the plugin executable
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Component for ExternalPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ComponentKind {
        self.kind
    }

    fn executable(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
