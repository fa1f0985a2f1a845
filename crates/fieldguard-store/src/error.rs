use crate::key::StorageKey;

/// Errors that can occur reading or declaring stored fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The field was never successfully written on this owner.
    #[error("attribute {0} is not set")]
    AttributeNotSet(StorageKey),

    /// The slot holds a value of another type than the field declares.
    #[error("slot {key} does not hold a value of type {expected}")]
    TypeMismatch {
        key: StorageKey,
        expected: &'static str,
    },

    /// The field kind's counter is spent; no more keys can be minted.
    #[error("field kind {kind} has no storage keys left")]
    KindExhausted { kind: &'static str },
}

pub type Result<T> = std::result::Result<T, StoreError>;
