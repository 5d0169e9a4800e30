use std::collections::HashMap;
use std::sync::Arc;

use crate::config::model::Configuration;
use crate::plugin_system::component::ComponentKind;
use crate::plugin_system::registry::ComponentRegistry;
use crate::plugin_system::traits::Component;

/// Read-only view of the loaded registries.
///
/// Produced by [`Configuration::freeze`] once decoding and loading are done.
/// Cloning is cheap and the catalog can be shared freely between worker
/// threads; there is no way to modify it.
#[derive(Debug, Clone)]
pub struct ComponentCatalog {
    registries: Arc<HashMap<ComponentKind, ComponentRegistry>>,
    plugin_min_port: u16,
    plugin_max_port: u16,
    disable_checkpoint: bool,
    disable_checkpoint_signature: bool,
}

impl ComponentCatalog {
    /// Look up a component by category and name
    pub fn get(&self, kind: ComponentKind, name: &str) -> Option<Arc<dyn Component>> {
        self.registries.get(&kind).and_then(|registry| registry.get(name))
    }

    /// Whether the category took part in loading
    pub fn participates(&self, kind: ComponentKind) -> bool {
        self.registries.contains_key(&kind)
    }

    /// Sorted names in a category; empty when the category is not participating
    pub fn names(&self, kind: ComponentKind) -> Vec<String> {
        self.registries
            .get(&kind)
            .map(ComponentRegistry::names)
            .unwrap_or_default()
    }

    /// The frozen registry for a category
    pub fn registry(&self, kind: ComponentKind) -> Option<&ComponentRegistry> {
        self.registries.get(&kind)
    }

    pub fn plugin_min_port(&self) -> u16 {
        self.plugin_min_port
    }

    pub fn plugin_max_port(&self) -> u16 {
        self.plugin_max_port
    }

    pub fn disable_checkpoint(&self) -> bool {
        self.disable_checkpoint
    }

    pub fn disable_checkpoint_signature(&self) -> bool {
        self.disable_checkpoint_signature
    }
}

impl Configuration {
    /// Consume the configuration and publish its registries read-only.
    pub fn freeze(self) -> ComponentCatalog {
        let mut registries = HashMap::new();
        let slots = [
            (ComponentKind::Builder, self.builders),
            (ComponentKind::Provisioner, self.provisioners),
            (ComponentKind::PostProcessor, self.post_processors),
        ];
        for (kind, registry) in slots {
            if let Some(registry) = registry {
                registries.insert(kind, registry);
            }
        }

        ComponentCatalog {
            registries: Arc::new(registries),
            plugin_min_port: self.plugin_min_port,
            plugin_max_port: self.plugin_max_port,
            disable_checkpoint: self.disable_checkpoint,
            disable_checkpoint_signature: self.disable_checkpoint_signature,
        }
    }
}
