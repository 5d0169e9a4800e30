use std::fmt;

/// What the loader does when a declared name is already registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// The declared external plugin replaces the registered component
    #[default]
    Overwrite,
    /// The registered component stays; the declaration is skipped
    KeepExisting,
}

impl MergePolicy {
    /// Whether a conflicting declaration should replace the registered entry
    pub fn replaces_existing(&self) -> bool {
        matches!(self, MergePolicy::Overwrite)
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergePolicy::Overwrite => f.write_str("overwrite"),
            MergePolicy::KeepExisting => f.write_str("keep-existing"),
        }
    }
}
