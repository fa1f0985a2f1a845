use std::fmt;
use std::marker::PhantomData;

use fieldguard_store::{FieldRegistry, Owner, StoreError};

use crate::error::InvalidValue;
use crate::rule::{Validate, Validated};

const NOT_POSITIVE: &str = "value must be > 0";

/// Accepts values strictly greater than zero, unchanged.
///
/// Zero is `T::default()`. Values that do not compare with zero at all,
/// such as `f64::NAN`, are rejected like any other non-positive value.
pub struct Quantity<T> {
    _value: PhantomData<fn(T) -> T>,
}

impl<T> Quantity<T> {
    pub fn new() -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

impl<T> Default for Quantity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Quantity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Quantity")
    }
}

impl<T> Validate for Quantity<T>
where
    T: PartialOrd + Default + 'static,
{
    type Value = T;
    const KIND: &'static str = "Quantity";

    fn validate(&self, _owner: &dyn Owner, value: T) -> Result<T, InvalidValue> {
        if value > T::default() {
            Ok(value)
        } else {
            Err(InvalidValue::new(NOT_POSITIVE))
        }
    }
}

impl<T> Validated<Quantity<T>>
where
    T: PartialOrd + Default + 'static,
{
    /// Declare a strictly positive field.
    pub fn quantity(registry: &mut FieldRegistry) -> Result<Self, StoreError> {
        Self::declare(registry, Quantity::new())
    }
}
