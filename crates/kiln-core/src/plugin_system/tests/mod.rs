pub mod discovery_tests;

use std::sync::Arc;

use crate::plugin_system::component::ComponentKind;
use crate::plugin_system::traits::Component;

// --- Built-in component shared by the plugin system tests ---
#[derive(Debug)]
pub(crate) struct BuiltIn {
    name: String,
    kind: ComponentKind,
}

impl BuiltIn {
    pub(crate) fn new(kind: ComponentKind, name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }

    pub(crate) fn arc(kind: ComponentKind, name: &str) -> Arc<dyn Component> {
        Arc::new(Self::new(kind, name))
    }
}

impl Component for BuiltIn {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ComponentKind {
        self.kind
    }
}
