use std::collections::HashMap;
use std::sync::Arc;

use crate::plugin_system::component::ComponentKind;
use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::traits::Component;

/// Name-keyed registry of components for a single category
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    /// Category every registered component must belong to
    kind: ComponentKind,
    /// Registered components (using Arc for shared ownership)
    components: HashMap<String, Arc<dyn Component>>,
}

impl ComponentRegistry {
    /// Create an empty registry for the given category
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            components: HashMap::new(),
        }
    }

    /// Category this registry holds
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Register a component under its own name.
    ///
    /// Used for seeding built-ins; fails if the name is taken or the component
    /// belongs to another category.
    pub fn register(&mut self, component: Arc<dyn Component>) -> Result<(), PluginSystemError> {
        let name = component.name().to_string();

        if component.kind() != self.kind {
            return Err(PluginSystemError::RegistrationError {
                kind: self.kind,
                name,
                message: format!("component is a {}, not a {}", component.kind(), self.kind),
            });
        }
        if name.is_empty() {
            return Err(PluginSystemError::RegistrationError {
                kind: self.kind,
                name,
                message: "component name is empty".to_string(),
            });
        }
        if self.components.contains_key(&name) {
            return Err(PluginSystemError::RegistrationError {
                kind: self.kind,
                name,
                message: "already registered".to_string(),
            });
        }

        self.components.insert(name, component);
        Ok(())
    }

    /// Insert a component under `name`, returning whatever it replaced.
    pub(crate) fn insert(
        &mut self,
        name: impl Into<String>,
        component: Arc<dyn Component>,
    ) -> Option<Arc<dyn Component>> {
        self.components.insert(name.into(), component)
    }

    /// Unregister a component by name
    pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn Component>> {
        self.components.remove(name)
    }

    /// Check if a component is registered by name
    pub fn has(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Get a component Arc by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Component>> {
        self.components.get(name).cloned()
    }

    /// Number of registered components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.components.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get an iterator over registered names and components
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Arc<dyn Component>)> {
        self.components.iter()
    }
}
