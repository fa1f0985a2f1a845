//! Validated fields: reject or normalize values before they reach storage.
//!
//! A [`Validated`] field wraps the plain storage from `fieldguard-store` with
//! a [`Validate`] rule. Every write runs the rule first; only the value the
//! rule returns is stored, and a rejected write changes nothing.
//!
//! Built-in rules:
//! - [`Check`] — adapts a caller-supplied predicate
//! - [`Quantity`] — strictly positive values
//! - [`NonBlank`] — strings that are not empty after trimming (stored trimmed)

pub mod check;
pub mod error;
pub mod non_blank;
pub mod quantity;
pub mod rule;

pub use check::{Check, Rejected};
pub use error::{InvalidValue, Result, ValidationError};
pub use non_blank::NonBlank;
pub use quantity::Quantity;
pub use rule::{Validate, Validated};
