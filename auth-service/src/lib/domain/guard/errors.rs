use thiserror::Error;

use crate::domain::token::errors::TokenError;
use crate::user::errors::UserError;

/// Reasons the guard refuses a protected request, in evaluation order.
#[derive(Debug, Clone, Error)]
pub enum GuardError {
    #[error("Handshake failed")]
    HandshakeFailed,

    #[error("Authentication cookie missing")]
    MissingSessionUser,

    #[error("Authentication bearer missing")]
    MissingBearerToken,

    #[error("Invalid token")]
    InvalidToken,

    // Infrastructure errors
    #[error("Guard storage error: {0}")]
    StorageError(String),
}

impl GuardError {
    /// Whether this is a rejection of the request rather than a store failure.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, GuardError::StorageError(_))
    }
}

impl From<TokenError> for GuardError {
    fn from(err: TokenError) -> Self {
        GuardError::StorageError(err.to_string())
    }
}

impl From<UserError> for GuardError {
    fn from(err: UserError) -> Self {
        GuardError::StorageError(err.to_string())
    }
}
