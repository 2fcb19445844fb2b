use thiserror::Error;

use crate::domain::token::errors::TokenError;
use crate::user::errors::UserError;

/// Error for session lifecycle operations (signin, signout, handshake)
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    User(UserError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl From<UserError> for SessionError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidCredentials => SessionError::InvalidCredentials,
            other => SessionError::User(other),
        }
    }
}
