use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::HandshakeNonce;
use crate::domain::session::models::Session;
use crate::domain::session::models::SignInCommand;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::token::models::BearerToken;
use crate::domain::token::ports::TokenRegistry;
use crate::user::ports::UserServicePort;

/// Domain service for signin, signout and handshake.
pub struct SessionService<US, TR>
where
    US: UserServicePort,
    TR: TokenRegistry,
{
    user_service: Arc<US>,
    token_registry: Arc<TR>,
}

impl<US, TR> SessionService<US, TR>
where
    US: UserServicePort,
    TR: TokenRegistry,
{
    pub fn new(user_service: Arc<US>, token_registry: Arc<TR>) -> Self {
        Self {
            user_service,
            token_registry,
        }
    }
}

#[async_trait]
impl<US, TR> SessionServicePort for SessionService<US, TR>
where
    US: UserServicePort,
    TR: TokenRegistry,
{
    async fn sign_in(
        &self,
        command: SignInCommand,
        session: Session,
    ) -> Result<(BearerToken, Session), SessionError> {
        let user = self
            .user_service
            .verify_credentials(&command.email, &command.password)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Signin rejected");
                SessionError::from(e)
            })?;

        let token = self.token_registry.issue(&user.email).await?;
        tracing::info!(email = %user.email, "User signed in");

        let session = session.signed_in(user.email, token.clone());
        Ok((token, session))
    }

    async fn sign_out(&self, session: Session) -> Result<Session, SessionError> {
        if let Some(email) = &session.user {
            let revoked = self.token_registry.revoke_all(email).await?;
            tracing::info!(email = %email, revoked, "User signed out");
        } else {
            tracing::debug!("Signout without an authenticated session");
        }

        Ok(session.cleared())
    }

    async fn handshake(&self, session: Session) -> Result<(HandshakeNonce, Session), SessionError> {
        let nonce = HandshakeNonce::generate();
        tracing::debug!("Handshake nonce bound to session");

        let session = session.with_handshake(nonce.clone());
        Ok((nonce, session))
    }
}
