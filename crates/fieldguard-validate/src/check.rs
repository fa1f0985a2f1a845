use std::fmt;
use std::marker::PhantomData;

use fieldguard_store::{FieldRegistry, Owner, StoreError};

use crate::error::InvalidValue;
use crate::rule::{Validate, Validated};

/// Returned by a checker to reject the value it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejected;

/// Adapts a caller-supplied checker into a rule.
///
/// The checker borrows the proposed value and returns the value to store,
/// which may be transformed, or [`Rejected`]. Keeping the original is
/// what lets a rejection name it; an identity checker pays for its own
/// clone on success. Rejections read `"<description>; <value:?> is not valid."`,
/// or just `"<value:?> is not valid."` when the description is empty.
pub struct Check<T, F> {
    checker: F,
    description: String,
    prefix: String,
    _value: PhantomData<fn(T) -> T>,
}

impl<T, F> Check<T, F>
where
    F: Fn(&T) -> Result<T, Rejected>,
{
    pub fn new(description: impl Into<String>, checker: F) -> Self {
        let description = description.into();
        let prefix = if description.is_empty() {
            String::new()
        } else {
            format!("{description}; ")
        };

        Self {
            checker,
            description,
            prefix,
            _value: PhantomData,
        }
    }

    /// What the checker requires of a value.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<T, F> Validate for Check<T, F>
where
    T: fmt::Debug + 'static,
    F: Fn(&T) -> Result<T, Rejected>,
{
    type Value = T;
    const KIND: &'static str = "Check";

    fn validate(&self, _owner: &dyn Owner, value: T) -> Result<T, InvalidValue> {
        (self.checker)(&value).map_err(|Rejected| {
            InvalidValue::new(format!("{}{value:?} is not valid.", self.prefix))
        })
    }
}

impl<T, F> Validated<Check<T, F>>
where
    T: fmt::Debug + 'static,
    F: Fn(&T) -> Result<T, Rejected>,
{
    /// Declare a field guarded by `checker`.
    pub fn check(
        registry: &mut FieldRegistry,
        description: impl Into<String>,
        checker: F,
    ) -> Result<Self, StoreError> {
        Self::declare(registry, Check::new(description, checker))
    }
}

impl<T, F> fmt::Debug for Check<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use fieldguard_store::{Field, Slots};

    use super::*;

    fn even(value: &i64) -> Result<i64, Rejected> {
        if value % 2 == 0 {
            Ok(*value)
        } else {
            Err(Rejected)
        }
    }

    #[test]
    fn accepts_and_stores_checker_result() {
        let mut registry = FieldRegistry::new();
        let field = Validated::check(&mut registry, "must be even", even).unwrap();
        let mut slots = Slots::new();

        field.set(&mut slots, 4).unwrap();
        assert_eq!(field.get(&slots), Ok(&4));
    }

    #[test]
    fn rejection_message_includes_description_and_value() {
        let mut registry = FieldRegistry::new();
        let field = Validated::check(&mut registry, "must be even", even).unwrap();
        let mut slots = Slots::new();

        let err = field.set(&mut slots, 5).unwrap_err();
        assert_eq!(
            err.as_invalid().map(InvalidValue::message),
            Some("must be even; 5 is not valid.")
        );
    }

    #[test]
    fn empty_description_has_no_prefix() {
        let rule = Check::new("", even);
        let err = rule.validate(&Slots::new(), 3).unwrap_err();

        assert_eq!(err.message(), "3 is not valid.");
        assert_eq!(rule.description(), "");
    }

    #[test]
    fn message_uses_original_value_not_transformed() {
        let rule = Check::new("must be short", |value: &String| {
            let upper = value.to_uppercase();
            if upper.len() <= 3 {
                Ok(upper)
            } else {
                Err(Rejected)
            }
        });

        assert_eq!(rule.validate(&Slots::new(), "abc".into()), Ok("ABC".into()));
        assert_eq!(
            rule.validate(&Slots::new(), "abcd".into())
                .unwrap_err()
                .message(),
            r#"must be short; "abcd" is not valid."#
        );
    }

    #[test]
    fn transformed_value_is_what_gets_stored() {
        let mut registry = FieldRegistry::new();
        let field = Validated::check(&mut registry, "must be a percentage", |value: &f64| {
            if (0.0..=100.0).contains(value) {
                Ok(value / 100.0)
            } else {
                Err(Rejected)
            }
        })
        .unwrap();
        let mut slots = Slots::new();

        field.set(&mut slots, 25.0).unwrap();
        assert_eq!(field.get(&slots), Ok(&0.25));
        assert!(field.set(&mut slots, 250.0).is_err());
        assert_eq!(field.get(&slots), Ok(&0.25));
    }

    #[test]
    fn checked_values_need_not_be_clone() {
        #[derive(Debug, PartialEq)]
        struct Token(String);

        let mut registry = FieldRegistry::new();
        let token = Validated::check(&mut registry, "must start with tk_", |value: &Token| {
            match value.0.strip_prefix("tk_") {
                Some(rest) => Ok(Token(rest.to_owned())),
                None => Err(Rejected),
            }
        })
        .unwrap();
        let mut slots = Slots::new();

        token.set(&mut slots, Token("tk_abc".into())).unwrap();
        assert_eq!(token.get(&slots), Ok(&Token("abc".into())));

        let err = token.set(&mut slots, Token("abc".into())).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"must start with tk_; Token("abc") is not valid."#
        );
    }

    #[test]
    fn check_fields_are_numbered_under_check_kind() {
        let mut registry = FieldRegistry::new();
        let first = Validated::check(&mut registry, "must be even", even).unwrap();
        let second = Validated::check(&mut registry, "must be even", even).unwrap();

        assert_eq!(first.info().storage_key.to_string(), "_Check:0");
        assert_eq!(second.info().storage_key.to_string(), "_Check:1");
        assert_eq!(format!("{:?}", first.rule()), r#"Check { description: "must be even", .. }"#);
    }
}
