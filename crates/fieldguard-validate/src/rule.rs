use std::fmt;

use fieldguard_store::{AutoStorage, Field, FieldRegistry, Owner, StoreError};
use tracing::{debug, trace};

use crate::error::{InvalidValue, ValidationError};

/// A rule that accepts, normalizes, or rejects a proposed field value.
pub trait Validate {
    /// Type of value the rule checks.
    type Value: 'static;

    /// Field kind; validated fields using this rule are numbered under it.
    const KIND: &'static str;

    /// Return the value to store, or reject it.
    ///
    /// The returned value may differ from the input (e.g. trimmed).
    fn validate(
        &self,
        owner: &dyn Owner,
        value: Self::Value,
    ) -> std::result::Result<Self::Value, InvalidValue>;
}

/// A field that runs its rule before every write.
pub struct Validated<R: Validate> {
    storage: AutoStorage<R::Value>,
    rule: R,
}

impl<R: Validate> Validated<R> {
    /// Declare a field guarded by `rule`.
    pub fn declare(registry: &mut FieldRegistry, rule: R) -> std::result::Result<Self, StoreError> {
        Ok(Self {
            storage: AutoStorage::declare_as(registry, R::KIND)?,
            rule,
        })
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }
}

impl<R: Validate> Field for Validated<R> {
    type Value = R::Value;
    type Error = ValidationError;

    fn storage(&self) -> &AutoStorage<R::Value> {
        &self.storage
    }

    fn set<O: Owner>(&self, owner: &mut O, value: R::Value) -> crate::error::Result<()> {
        let key = self.storage.key();
        let accepted = match self.rule.validate(&*owner, value) {
            Ok(accepted) => accepted,
            Err(err) => {
                debug!(%key, error = %err, "rejected field write");
                return Err(err.into());
            }
        };

        trace!(%key, "accepted field write");
        self.storage.write(owner, accepted);
        Ok(())
    }
}

impl<R: Validate + fmt::Debug> fmt::Debug for Validated<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validated")
            .field("key", self.storage.key())
            .field("rule", &self.rule)
            .finish()
    }
}
