use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::model::{Configuration, RawComponents};
use crate::plugin_system::component::ComponentKind;
use crate::plugin_system::conflict::MergePolicy;
use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::handle::ExternalPlugin;
use crate::plugin_system::registry::ComponentRegistry;

/// Outcome of loading one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub kind: ComponentKind,
    /// False when the category's registry was absent and nothing was consulted
    pub participating: bool,
    /// Names registered (or re-registered) from declarations
    pub registered: Vec<String>,
    /// Names whose previously registered component was replaced
    pub replaced: Vec<String>,
    /// Names whose declaration was dropped in favour of the registered component
    pub kept_existing: Vec<String>,
    /// Declarations skipped as invalid, as `(name, path)`
    pub invalid: Vec<(String, String)>,
}

impl CategoryReport {
    fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            participating: false,
            registered: Vec::new(),
            replaced: Vec::new(),
            kept_existing: Vec::new(),
            invalid: Vec::new(),
        }
    }
}

/// Diagnostics from a load pass. Loading itself never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub categories: BTreeMap<ComponentKind, CategoryReport>,
}

impl LoadReport {
    pub fn category(&self, kind: ComponentKind) -> Option<&CategoryReport> {
        self.categories.get(&kind)
    }

    /// Total number of declarations registered across all categories
    pub fn registered_count(&self) -> usize {
        self.categories.values().map(|c| c.registered.len()).sum()
    }
}

/// Merges raw component declarations into the participating registries
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalComponentLoader {
    policy: MergePolicy,
}

impl ExternalComponentLoader {
    /// Create a loader using the default overwrite policy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: MergePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Load every category of `config`.
    ///
    /// Categories are independent: a category whose registry is `None` is
    /// skipped entirely and stays `None`.
    pub fn load(&self, config: &mut Configuration) -> LoadReport {
        let mut report = LoadReport::default();
        for kind in ComponentKind::ALL {
            let (raw, registry) = config.category_mut(kind);
            let category = self.load_category(kind, raw, registry);
            report.categories.insert(kind, category);
        }
        info!(
            "Loaded {} external component declaration(s) ({} policy)",
            report.registered_count(),
            self.policy
        );
        report
    }

    fn load_category(
        &self,
        kind: ComponentKind,
        raw: Option<&RawComponents>,
        registry: &mut Option<ComponentRegistry>,
    ) -> CategoryReport {
        let mut report = CategoryReport::new(kind);

        let Some(registry) = registry.as_mut() else {
            debug!("Skipping external {} discovery: category not participating", kind);
            return report;
        };
        report.participating = true;

        let Some(raw) = raw else {
            debug!("No external {} declarations", kind);
            return report;
        };

        for (name, path) in raw {
            if let Err(e) = validate_declaration(kind, name, path) {
                warn!("Skipping declaration: {}", e);
                report.invalid.push((name.clone(), path.clone()));
                continue;
            }

            if let Some(existing) = registry.get(name) {
                let same_plugin = existing.executable() == Some(Path::new(path));
                if !same_plugin {
                    if !self.policy.replaces_existing() {
                        warn!(
                            "Ignoring external {} '{}' at '{}': name already registered",
                            kind, name, path
                        );
                        report.kept_existing.push(name.clone());
                        continue;
                    }
                    warn!(
                        "External {} '{}' at '{}' overrides a registered component",
                        kind, name, path
                    );
                    report.replaced.push(name.clone());
                }
            }

            debug!("Registering external {} '{}' -> '{}'", kind, name, path);
            registry.insert(name.clone(), Arc::new(ExternalPlugin::new(kind, name.clone(), path)));
            report.registered.push(name.clone());
        }

        report
    }
}

/// Reject declarations that cannot name a usable plugin
pub fn validate_declaration(kind: ComponentKind, name: &str, path: &str) -> Result<(), PluginSystemError> {
    let reason = if name.trim().is_empty() {
        "component name is empty"
    } else if path.trim().is_empty() {
        "plugin path is empty"
    } else {
        return Ok(());
    };
    Err(PluginSystemError::InvalidDeclaration {
        kind,
        name: name.to_string(),
        path: path.to_string(),
        reason: reason.to_string(),
    })
}

impl Configuration {
    /// Merge declared external components into the participating registries
    /// using the default overwrite policy.
    pub fn load_external_components(&mut self) -> LoadReport {
        ExternalComponentLoader::new().load(self)
    }

    /// Like [`load_external_components`](Self::load_external_components) with
    /// an explicit conflict policy.
    pub fn load_external_components_with(&mut self, policy: MergePolicy) -> LoadReport {
        ExternalComponentLoader::with_policy(policy).load(self)
    }
}
