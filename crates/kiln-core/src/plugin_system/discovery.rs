use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::locate::user_plugin_dir;
use crate::config::model::{Configuration, RawComponents};
use crate::plugin_system::component::ComponentKind;
use crate::plugin_system::error::PluginSystemError;
use crate::utils::fs::{files_in_dir, strip_exe_suffix};

/// Plugins found on disk, per category
pub type DiscoveredPlugins = BTreeMap<ComponentKind, RawComponents>;

/// Finds external plugin binaries by file name.
///
/// A file named `kiln-builder-foo` (plus `.exe` on Windows) in one of the
/// plugin directories declares builder `foo`. Directories are scanned in the
/// order they were added and later directories win on name clashes.
#[derive(Debug, Clone, Default)]
pub struct PluginDiscovery {
    /// Directories to search, lowest precedence first
    plugin_dirs: Vec<PathBuf>,
}

impl PluginDiscovery {
    /// Create a discovery with no directories
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a discovery over [`default_dirs`](Self::default_dirs)
    pub fn with_default_dirs() -> Self {
        Self {
            plugin_dirs: Self::default_dirs(),
        }
    }

    /// The executable's directory, then `~/.kiln.d/plugins`, then the
    /// current working directory.
    pub fn default_dirs() -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        match std::env::current_exe() {
            Ok(exe) => {
                if let Some(parent) = exe.parent() {
                    dirs.push(parent.to_path_buf());
                }
            }
            Err(e) => warn!("Cannot determine executable directory for plugin discovery: {}", e),
        }
        if let Some(dir) = user_plugin_dir() {
            dirs.push(dir);
        }
        match std::env::current_dir() {
            Ok(cwd) => dirs.push(cwd),
            Err(e) => warn!("Cannot determine working directory for plugin discovery: {}", e),
        }
        dirs
    }

    /// Add a plugin directory to search
    pub fn add_plugin_dir<P: AsRef<Path>>(&mut self, dir: P) -> &mut Self {
        self.plugin_dirs.push(dir.as_ref().to_path_buf());
        self
    }

    pub fn plugin_dirs(&self) -> &[PathBuf] {
        &self.plugin_dirs
    }

    /// Scan every directory and collect plugins by category.
    pub fn discover(&self) -> Result<DiscoveredPlugins, PluginSystemError> {
        let mut found = DiscoveredPlugins::new();
        for dir in &self.plugin_dirs {
            self.scan_dir(dir, &mut found)?;
        }
        Ok(found)
    }

    /// Scan and record the results as raw declarations in `config`.
    ///
    /// Names the configuration already declares are left alone, so explicit
    /// document entries beat binaries found on disk. Registries are not
    /// touched; the opt-in gate still decides at load time. Returns how many
    /// declarations were added.
    pub fn discover_into(&self, config: &mut Configuration) -> Result<usize, PluginSystemError> {
        let found = self.discover()?;
        let mut added = 0;
        for (kind, plugins) in found {
            let raw = config.raw_slot(kind).get_or_insert_with(RawComponents::new);
            for (name, path) in plugins {
                if raw.contains_key(&name) {
                    debug!("Keeping declared {} '{}' over discovered '{}'", kind, name, path);
                    continue;
                }
                raw.insert(name, path);
                added += 1;
            }
        }
        Ok(added)
    }

    fn scan_dir(&self, dir: &Path, found: &mut DiscoveredPlugins) -> Result<(), PluginSystemError> {
        let files = files_in_dir(dir).map_err(|source| PluginSystemError::Discovery {
            dir: dir.to_path_buf(),
            source,
        })?;

        for path in files {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some((kind, name)) = parse_plugin_file_name(file_name) else {
                continue;
            };
            debug!("Discovered {} '{}' at {}", kind, name, path.display());
            found
                .entry(kind)
                .or_default()
                .insert(name, path.to_string_lossy().into_owned());
        }
        Ok(())
    }
}

/// Split a plugin binary file name into its category and component name.
///
/// Returns `None` for files that do not follow the naming convention or
/// carry an empty component name.
pub fn parse_plugin_file_name(file_name: &str) -> Option<(ComponentKind, String)> {
    let stem = strip_exe_suffix(file_name);
    ComponentKind::ALL.into_iter().find_map(|kind| {
        stem.strip_prefix(kind.binary_prefix().as_str())
            .filter(|name| !name.is_empty())
            .map(|name| (kind, name.to_string()))
    })
}
