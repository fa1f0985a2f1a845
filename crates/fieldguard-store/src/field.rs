use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use tracing::trace;

use crate::error::{Result, StoreError};
use crate::key::StorageKey;
use crate::registry::FieldRegistry;
use crate::slots::Owner;

/// Metadata describing a declared field, available without any owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    /// Slot this field reads and writes on every owner.
    pub storage_key: StorageKey,
    /// Field kind the key was minted for.
    pub kind: &'static str,
}

/// Get/set access to one declared field on any [`Owner`].
///
/// Every variant reads the same way, through its [`AutoStorage`]. Variants
/// differ only in what `set` does before the value reaches the slot.
pub trait Field {
    /// Type of the value held in the slot.
    type Value: 'static;

    /// Error returned by a rejected `set`.
    type Error: From<StoreError>;

    /// The storage this field delegates reads and writes to.
    fn storage(&self) -> &AutoStorage<Self::Value>;

    /// Write `value` to this field on `owner`.
    fn set<O: Owner>(&self, owner: &mut O, value: Self::Value) -> std::result::Result<(), Self::Error>;

    /// Borrow this field's value on `owner`.
    ///
    /// Fails with [`StoreError::AttributeNotSet`] until a `set` has succeeded.
    fn get<'o, O: Owner>(&self, owner: &'o O) -> Result<&'o Self::Value> {
        self.storage().read(owner)
    }

    /// Check whether this field has a value on `owner`.
    fn is_set<O: Owner>(&self, owner: &O) -> bool {
        owner.slots().contains(self.storage().key())
    }

    /// Describe this field; needs no owner.
    fn info(&self) -> FieldInfo {
        self.storage().info()
    }
}

/// A field that stores whatever it is given.
pub struct AutoStorage<T> {
    key: StorageKey,
    _value: PhantomData<fn() -> T>,
}

impl<T: 'static> AutoStorage<T> {
    /// Kind under which plain stored fields are counted.
    pub const KIND: &'static str = "AutoStorage";

    /// Declare a plain stored field.
    pub fn declare(registry: &mut FieldRegistry) -> Result<Self> {
        Self::declare_as(registry, Self::KIND)
    }

    /// Declare storage counted under another field kind.
    ///
    /// Wrapping fields use this so that each of their kinds numbers its
    /// keys independently.
    pub fn declare_as(registry: &mut FieldRegistry, kind: &'static str) -> Result<Self> {
        Ok(Self {
            key: registry.allocate(kind)?,
            _value: PhantomData,
        })
    }

    /// Key of the slot this field owns on every owner.
    pub fn key(&self) -> &StorageKey {
        &self.key
    }

    /// Describe this field; needs no owner.
    pub fn info(&self) -> FieldInfo {
        FieldInfo {
            storage_key: self.key,
            kind: self.key.kind(),
        }
    }

    /// Borrow the stored value on `owner`.
    pub fn read<'o, O: Owner + ?Sized>(&self, owner: &'o O) -> Result<&'o T> {
        owner.slots().get(&self.key)
    }

    /// Store `value` on `owner` as is.
    pub fn write<O: Owner + ?Sized>(&self, owner: &mut O, value: T) {
        trace!(key = %self.key, "slot written");
        owner.slots_mut().insert(self.key, value);
    }
}

impl<T: 'static> Field for AutoStorage<T> {
    type Value = T;
    type Error = StoreError;

    fn storage(&self) -> &AutoStorage<T> {
        self
    }

    fn set<O: Owner>(&self, owner: &mut O, value: T) -> Result<()> {
        self.write(owner, value);
        Ok(())
    }
}

impl<T> fmt::Debug for AutoStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoStorage").field("key", &self.key).finish()
    }
}
