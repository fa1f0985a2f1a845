use fieldguard_store::{FieldRegistry, Owner, StoreError};

use crate::error::InvalidValue;
use crate::rule::{Validate, Validated};

const BLANK: &str = "value cannot be empty or blank";

/// Accepts strings with non-whitespace content and stores them trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonBlank;

impl Validate for NonBlank {
    type Value = String;
    const KIND: &'static str = "NonBlank";

    fn validate(&self, _owner: &dyn Owner, value: String) -> Result<String, InvalidValue> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(InvalidValue::new(BLANK));
        }

        if trimmed.len() == value.len() {
            Ok(value)
        } else {
            Ok(trimmed.to_owned())
        }
    }
}

impl Validated<NonBlank> {
    /// Declare a non-blank string field.
    pub fn non_blank(registry: &mut FieldRegistry) -> Result<Self, StoreError> {
        Self::declare(registry, NonBlank)
    }
}
