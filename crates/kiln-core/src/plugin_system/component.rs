use std::fmt;

use crate::kernel::constants::TOOL_PREFIX;

/// The three categories of pluggable components
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentKind {
    Builder,
    Provisioner,
    PostProcessor,
}

impl ComponentKind {
    /// Every category, in the order they are loaded and reported
    pub const ALL: [ComponentKind; 3] = [
        ComponentKind::Builder,
        ComponentKind::Provisioner,
        ComponentKind::PostProcessor,
    ];

    /// Key holding this category's declarations in the config document
    pub fn config_key(&self) -> &'static str {
        match self {
            ComponentKind::Builder => "builders",
            ComponentKind::Provisioner => "provisioners",
            ComponentKind::PostProcessor => "post-processors",
        }
    }

    /// Category segment of plugin binary names (`kiln-<segment>-<name>`)
    pub fn binary_segment(&self) -> &'static str {
        match self {
            ComponentKind::Builder => "builder",
            ComponentKind::Provisioner => "provisioner",
            ComponentKind::PostProcessor => "post-processor",
        }
    }

    /// File name prefix shared by this category's plugin binaries
    pub fn binary_prefix(&self) -> String {
        format!("{}-{}-", TOOL_PREFIX, self.binary_segment())
    }

    /// Expected binary file name for a component, without platform suffix
    pub fn binary_name(&self, name: &str) -> String {
        format!("{}{}", self.binary_prefix(), name)
    }

    /// Parse a category from its config key or binary segment
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "builder" | "builders" => Some(ComponentKind::Builder),
            "provisioner" | "provisioners" => Some(ComponentKind::Provisioner),
            "post-processor" | "post-processors" | "postprocessor" => {
                Some(ComponentKind::PostProcessor)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary_segment())
    }
}
