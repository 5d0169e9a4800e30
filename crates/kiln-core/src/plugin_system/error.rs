//! # Kiln Plugin System Errors
//!
//! [`PluginSystemError`] covers problems with individual component
//! declarations, built-in registration and plugin directory scans.
//!
//! `InvalidDeclaration` is never fatal: the loader logs it, records it in its
//! report and moves on to the next declaration.
use std::path::PathBuf;

use crate::plugin_system::component::ComponentKind;

#[derive(Debug, thiserror::Error)]
pub enum PluginSystemError {
    #[error("Invalid {kind} declaration '{name}' -> '{path}': {reason}")]
    InvalidDeclaration {
        kind: ComponentKind,
        name: String,
        path: String,
        reason: String,
    },

    #[error("Component registration error for {kind} '{name}': {message}")]
    RegistrationError {
        kind: ComponentKind,
        name: String,
        message: String,
    },

    #[error("Plugin discovery failed in '{}': {source}", dir.display())]
    Discovery {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
