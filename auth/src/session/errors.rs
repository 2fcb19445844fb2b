use thiserror::Error;

/// Error type for sealing and opening session values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SealError {
    #[error("Sealing secret too short: minimum {min} bytes, got {actual}")]
    WeakSecret { min: usize, actual: usize },

    #[error("Failed to seal value: {0}")]
    SealingFailed(String),

    #[error("Sealed value is expired")]
    Expired,

    #[error("Sealed value is invalid: {0}")]
    Invalid(String),
}
