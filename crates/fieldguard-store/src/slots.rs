use std::any::{self, Any};
use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, StoreError};
use crate::key::StorageKey;

/// Backing values for the declared fields of one owning object.
///
/// A slot exists only once its field has been written, and lives as long
/// as the table does.
#[derive(Default)]
pub struct Slots {
    values: HashMap<StorageKey, Box<dyn Any>>,
}

impl Slots {
    /// Create an empty slot table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the value stored under `key`.
    pub fn get<T: 'static>(&self, key: &StorageKey) -> Result<&T> {
        let value = self
            .values
            .get(key)
            .ok_or(StoreError::AttributeNotSet(*key))?;

        value
            .downcast_ref::<T>()
            .ok_or_else(|| StoreError::TypeMismatch {
                key: *key,
                expected: any::type_name::<T>(),
            })
    }

    /// Store `value` under `key`, replacing whatever was there.
    pub fn insert<T: 'static>(&mut self, key: StorageKey, value: T) {
        self.values.insert(key, Box::new(value));
    }

    /// Check if a value has been stored under `key`.
    pub fn contains(&self, key: &StorageKey) -> bool {
        self.values.contains_key(key)
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no field has been written yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys of all populated slots, sorted by kind then index.
    pub fn keys(&self) -> Vec<StorageKey> {
        let mut keys: Vec<StorageKey> = self.values.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

impl fmt::Debug for Slots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slots").field("keys", &self.keys()).finish()
    }
}

/// An object whose declared fields keep their values in a [`Slots`] table.
///
/// This is all an owning type implements; the fields do the rest.
pub trait Owner {
    fn slots(&self) -> &Slots;
    fn slots_mut(&mut self) -> &mut Slots;
}

impl Owner for Slots {
    fn slots(&self) -> &Slots {
        self
    }

    fn slots_mut(&mut self) -> &mut Slots {
        self
    }
}
