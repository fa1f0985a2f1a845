//! Per-owner backing slots and storage key registry for declared fields.
//!
//! A field is declared once against a [`FieldRegistry`], which mints a
//! [`StorageKey`] unique among all fields of the same kind. Owning types
//! carry a [`Slots`] table and expose it through [`Owner`]; the field reads
//! and writes its own slot in that table and nothing else.
//!
//! This crate is the bottom of the stack: [`AutoStorage`] stores values
//! verbatim. Validation lives in `fieldguard-validate`.

pub mod error;
pub mod field;
pub mod key;
pub mod registry;
pub mod slots;

pub use error::{Result, StoreError};
pub use field::{AutoStorage, Field, FieldInfo};
pub use key::StorageKey;
pub use registry::FieldRegistry;
pub use slots::{Owner, Slots};
