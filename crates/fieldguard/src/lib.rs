//! Declared object fields that validate every assignment.
//!
//! fieldguard gives each declared field its own slot on the owning object
//! and routes writes through a validation rule, so an owner only ever holds
//! values its rules accepted.
//!
//! # Crate Structure
//!
//! - [`store`] — Storage keys, the field registry, per-owner slots
//! - [`validate`] — Validated fields and the built-in rules
//! - `logging` — Subscriber setup for the crates' tracing events (behind `logging` feature)
//!
//! # Example
//!
//! ```
//! use fieldguard::prelude::*;
//!
//! struct Item {
//!     slots: Slots,
//! }
//!
//! impl Owner for Item {
//!     fn slots(&self) -> &Slots {
//!         &self.slots
//!     }
//!
//!     fn slots_mut(&mut self) -> &mut Slots {
//!         &mut self.slots
//!     }
//! }
//!
//! let mut registry = FieldRegistry::new();
//! let weight = Validated::<Quantity<f64>>::quantity(&mut registry)?;
//!
//! let mut item = Item { slots: Slots::new() };
//! weight.set(&mut item, 2.5)?;
//! assert!(weight.set(&mut item, -1.0).is_err());
//! assert_eq!(weight.get(&item)?, &2.5);
//! # Ok::<(), fieldguard::validate::ValidationError>(())
//! ```

/// Re-export storage types.
pub mod store {
    pub use fieldguard_store::*;
}

/// Re-export validation types.
pub mod validate {
    pub use fieldguard_validate::*;
}

#[cfg(feature = "logging")]
pub mod logging;

/// The types needed to declare and use fields.
pub mod prelude {
    pub use fieldguard_store::{
        AutoStorage, Field, FieldInfo, FieldRegistry, Owner, Slots, StorageKey,
    };
    pub use fieldguard_validate::{
        Check, InvalidValue, NonBlank, Quantity, Rejected, Validate, Validated, ValidationError,
    };
}
