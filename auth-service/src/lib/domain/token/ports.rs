use async_trait::async_trait;

use crate::domain::token::errors::TokenError;
use crate::domain::token::models::BearerToken;
use crate::domain::user::models::EmailAddress;

/// Issues, checks and revokes per-user bearer tokens.
///
/// A user may hold any number of live tokens at once (one per device).
#[async_trait]
pub trait TokenRegistry: Send + Sync + 'static {
    /// Issue a fresh token bound to `email`.
    ///
    /// The returned token is unique across the whole registry.
    ///
    /// # Errors
    /// * `StorageError` - Registry operation failed
    async fn issue(&self, email: &EmailAddress) -> Result<BearerToken, TokenError>;

    /// Whether `token` is currently live for `email`.
    ///
    /// A token issued to another email is never valid here.
    ///
    /// # Errors
    /// * `StorageError` - Registry operation failed
    async fn validate(&self, email: &EmailAddress, token: &BearerToken)
        -> Result<bool, TokenError>;

    /// Revoke every token of `email`.
    ///
    /// Idempotent; revoking a user without tokens is a no-op.
    ///
    /// # Returns
    /// Number of tokens removed
    ///
    /// # Errors
    /// * `StorageError` - Registry operation failed
    async fn revoke_all(&self, email: &EmailAddress) -> Result<usize, TokenError>;
}
