use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::HandshakeNonce;
use crate::domain::session::models::Session;
use crate::domain::session::models::SignInCommand;
use crate::domain::token::models::BearerToken;

/// Port for the operations that establish and tear down sessions.
///
/// Every operation takes the current session by value and hands back the
/// session the caller must persist on the client.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Verify credentials, issue a token and bind it to the session.
    ///
    /// # Returns
    /// Issued token and the signed-in session
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password; nothing is issued
    /// * `User` / `Token` - Underlying store failed
    async fn sign_in(
        &self,
        command: SignInCommand,
        session: Session,
    ) -> Result<(BearerToken, Session), SessionError>;

    /// Revoke every token of the session's user and clear the session.
    ///
    /// Succeeds on an empty session.
    ///
    /// # Errors
    /// * `Token` - Registry failed during revocation
    async fn sign_out(&self, session: Session) -> Result<Session, SessionError>;

    /// Bind a fresh handshake nonce to the session.
    async fn handshake(&self, session: Session) -> Result<(HandshakeNonce, Session), SessionError>;
}
