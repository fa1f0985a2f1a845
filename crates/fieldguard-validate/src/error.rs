use fieldguard_store::StoreError;

/// A proposed field value was rejected by its rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidValue {
    message: String,
}

impl InvalidValue {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Human-readable reason for the rejection.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors that can occur writing or declaring validated fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The rule rejected the value; the field is unchanged.
    #[error(transparent)]
    Invalid(#[from] InvalidValue),

    /// Storage-level error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ValidationError {
    /// The rejection, if this error came from a rule.
    pub fn as_invalid(&self) -> Option<&InvalidValue> {
        match self {
            ValidationError::Invalid(invalid) => Some(invalid),
            ValidationError::Store(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
