use std::fmt;

use serde::{Serialize, Serializer};

/// Identity of one declared field's backing slot.
///
/// Rendered as `_<Kind>:<N>`, where `N` is the per-kind declaration index.
/// Keys are minted only by [`FieldRegistry::allocate`](crate::FieldRegistry::allocate)
/// and also carry the id of the registry that minted them, so keys from
/// different registries never compare equal even when they render the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageKey {
    kind: &'static str,
    index: u64,
    registry: u64,
}

impl StorageKey {
    pub(crate) fn new(kind: &'static str, index: u64, registry: u64) -> Self {
        Self {
            kind,
            index,
            registry,
        }
    }

    /// The field kind this key was minted for.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Position of this key in its kind's declaration order.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Id of the registry that minted this key.
    pub fn registry(&self) -> u64 {
        self.registry
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_{}:{}", self.kind, self.index)
    }
}

impl Serialize for StorageKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
