use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::config::error::ConfigError;
use crate::plugin_system::component::ComponentKind;
use crate::plugin_system::registry::ComponentRegistry;

/// Raw component declarations for one category: component name -> plugin path
pub type RawComponents = BTreeMap<String, String>;

/// Process-wide Kiln configuration.
///
/// The value goes through two mutation phases and is then frozen:
/// decoding fills the scalars and the `raw_*` declarations, loading merges
/// those declarations into whichever registries the caller initialized.
///
/// A registry field left as `None` means the category does not take part in
/// external discovery at all, whatever the document declares for it.
/// `Some` with an empty registry opts the category in with no built-ins.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    /// Lower bound for ports handed to plugin subprocesses.
    /// Document values outside `0..=65535` are rejected as a decode error.
    pub plugin_min_port: u16,
    /// Upper bound for ports handed to plugin subprocesses.
    /// Document values outside `0..=65535` are rejected as a decode error.
    pub plugin_max_port: u16,
    pub disable_checkpoint: bool,
    pub disable_checkpoint_signature: bool,

    /// Builder declarations from the document (`builders`)
    pub raw_builders: Option<RawComponents>,
    /// Provisioner declarations from the document (`provisioners`)
    pub raw_provisioners: Option<RawComponents>,
    /// Post-processor declarations from the document (`post-processors`)
    pub raw_post_processors: Option<RawComponents>,

    pub builders: Option<ComponentRegistry>,
    pub provisioners: Option<ComponentRegistry>,
    pub post_processors: Option<ComponentRegistry>,
}

impl Configuration {
    /// Create an empty configuration with no participating categories
    pub fn new() -> Self {
        Self::default()
    }

    /// Opt a category into external discovery.
    ///
    /// Creates an empty registry for `kind` if none exists yet and returns it,
    /// so built-in components can be registered before loading.
    pub fn participate(&mut self, kind: ComponentKind) -> &mut ComponentRegistry {
        self.registry_slot(kind)
            .get_or_insert_with(|| ComponentRegistry::new(kind))
    }

    /// Raw declarations for a category, if the document declared any
    pub fn raw(&self, kind: ComponentKind) -> Option<&RawComponents> {
        match kind {
            ComponentKind::Builder => self.raw_builders.as_ref(),
            ComponentKind::Provisioner => self.raw_provisioners.as_ref(),
            ComponentKind::PostProcessor => self.raw_post_processors.as_ref(),
        }
    }

    /// Mutable access to a category's raw declarations slot
    pub fn raw_slot(&mut self, kind: ComponentKind) -> &mut Option<RawComponents> {
        match kind {
            ComponentKind::Builder => &mut self.raw_builders,
            ComponentKind::Provisioner => &mut self.raw_provisioners,
            ComponentKind::PostProcessor => &mut self.raw_post_processors,
        }
    }

    /// Registry for a category, `None` when the category is not participating
    pub fn registry(&self, kind: ComponentKind) -> Option<&ComponentRegistry> {
        match kind {
            ComponentKind::Builder => self.builders.as_ref(),
            ComponentKind::Provisioner => self.provisioners.as_ref(),
            ComponentKind::PostProcessor => self.post_processors.as_ref(),
        }
    }

    /// Mutable access to a category's registry slot
    pub fn registry_slot(&mut self, kind: ComponentKind) -> &mut Option<ComponentRegistry> {
        match kind {
            ComponentKind::Builder => &mut self.builders,
            ComponentKind::Provisioner => &mut self.provisioners,
            ComponentKind::PostProcessor => &mut self.post_processors,
        }
    }

    /// Borrow a category's raw declarations and registry slot together.
    pub(crate) fn category_mut(
        &mut self,
        kind: ComponentKind,
    ) -> (Option<&RawComponents>, &mut Option<ComponentRegistry>) {
        match kind {
            ComponentKind::Builder => (self.raw_builders.as_ref(), &mut self.builders),
            ComponentKind::Provisioner => (self.raw_provisioners.as_ref(), &mut self.provisioners),
            ComponentKind::PostProcessor => {
                (self.raw_post_processors.as_ref(), &mut self.post_processors)
            }
        }
    }

    /// Validated port range for plugin subprocesses.
    pub fn plugin_port_range(&self) -> Result<RangeInclusive<u16>, ConfigError> {
        if self.plugin_min_port > self.plugin_max_port {
            return Err(ConfigError::InvalidPortRange {
                min: self.plugin_min_port,
                max: self.plugin_max_port,
            });
        }
        Ok(self.plugin_min_port..=self.plugin_max_port)
    }
}
