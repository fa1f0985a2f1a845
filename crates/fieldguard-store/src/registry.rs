use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::key::StorageKey;

static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(0);

/// Kind-keyed counters that mint storage keys for declared fields.
///
/// Build one at program setup and pass it to every field declaration.
/// Each kind counts from zero independently and never reuses an index.
/// Every registry gets a process-unique id, so fields declared through
/// different registries never share a slot.
#[derive(Debug)]
pub struct FieldRegistry {
    id: u64,
    counters: HashMap<&'static str, u64>,
}

impl FieldRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            id: NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed),
            counters: HashMap::new(),
        }
    }

    /// Process-unique id stamped on every key this registry mints.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Mint the next storage key for `kind`.
    ///
    /// Fails only once the kind's counter is spent; the counter is left
    /// where it was.
    pub fn allocate(&mut self, kind: &'static str) -> Result<StorageKey> {
        let counter = self.counters.entry(kind).or_insert(0);
        let index = *counter;

        let Some(next) = index.checked_add(1) else {
            warn!(kind, "field kind exhausted");
            return Err(StoreError::KindExhausted { kind });
        };
        *counter = next;

        let key = StorageKey::new(kind, index, self.id);
        debug!(%key, kind, registry = self.id, "allocated storage key");
        Ok(key)
    }

    /// Number of keys minted so far for `kind`.
    pub fn declared(&self, kind: &str) -> u64 {
        self.counters.get(kind).copied().unwrap_or(0)
    }

    /// Kinds that have been allocated at least once.
    pub fn kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<&'static str> = self
            .counters
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(kind, _)| *kind)
            .collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use crate::slots::Slots;

    use super::*;

    #[test]
    fn counters_start_at_zero_per_kind() {
        let mut registry = FieldRegistry::new();

        assert_eq!(registry.allocate("Quantity").unwrap().to_string(), "_Quantity:0");
        assert_eq!(registry.allocate("Quantity").unwrap().to_string(), "_Quantity:1");
        assert_eq!(registry.allocate("NonBlank").unwrap().to_string(), "_NonBlank:0");
        assert_eq!(registry.allocate("Quantity").unwrap().to_string(), "_Quantity:2");
    }

    #[test]
    fn declared_and_kinds_track_allocations() {
        let mut registry = FieldRegistry::new();
        registry.allocate("Quantity").unwrap();
        registry.allocate("Quantity").unwrap();
        registry.allocate("Check").unwrap();

        assert_eq!(registry.declared("Quantity"), 2);
        assert_eq!(registry.declared("Check"), 1);
        assert_eq!(registry.declared("NonBlank"), 0);
        assert_eq!(registry.kinds(), vec!["Check", "Quantity"]);
    }

    #[test]
    fn registries_have_distinct_ids() {
        let first = FieldRegistry::new();
        let second = FieldRegistry::default();

        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn keys_from_separate_registries_do_not_alias() {
        let mut first = FieldRegistry::new();
        let mut second = FieldRegistry::new();
        let weight = first.allocate("Quantity").unwrap();
        let stock = second.allocate("Quantity").unwrap();
        assert_eq!(weight.to_string(), stock.to_string());
        assert_ne!(weight, stock);

        let mut slots = Slots::new();
        slots.insert(weight, 10i64);
        assert!(!slots.contains(&stock));

        slots.insert(stock, 99i64);
        assert_eq!(slots.get::<i64>(&weight), Ok(&10));
        assert_eq!(slots.get::<i64>(&stock), Ok(&99));
    }

    #[test]
    fn spent_counter_is_reported_and_left_unchanged() {
        let mut registry = FieldRegistry::new();
        registry.counters.insert("Check", u64::MAX);

        assert_eq!(
            registry.allocate("Check"),
            Err(StoreError::KindExhausted { kind: "Check" })
        );
        assert_eq!(registry.declared("Check"), u64::MAX);
        assert!(registry.allocate("NonBlank").is_ok());
    }

    proptest! {
        /// Keys of one kind are pairwise distinct however allocations interleave.
        #[test]
        fn keys_are_unique_per_kind(kinds in proptest::collection::vec(0usize..3, 1..64)) {
            const KINDS: [&str; 3] = ["Quantity", "NonBlank", "Check"];
            let mut registry = FieldRegistry::new();
            let mut seen = HashSet::new();

            for kind in kinds {
                let key = registry.allocate(KINDS[kind]).unwrap();
                prop_assert!(seen.insert(key.to_string()), "duplicate key {}", key);
            }
        }
    }
}
