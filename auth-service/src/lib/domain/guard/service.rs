use std::sync::Arc;

use crate::domain::guard::errors::GuardError;
use crate::domain::guard::models::GuardStage;
use crate::domain::guard::models::RequestCredentials;
use crate::domain::session::models::Session;
use crate::domain::token::ports::TokenRegistry;
use crate::domain::user::models::User;
use crate::user::ports::UserServicePort;

/// Request-time authentication check for protected operations.
///
/// Protected handlers call [`AuthGuard::authenticate`] before doing any work.
/// The checks run in a fixed order and the first failure decides the error:
///
/// 1. handshake nonce echoed in the `Handshake` header
/// 2. session names a user
/// 3. request carries a bearer token
/// 4. token is live in the registry for that user and equals the token the
///    session recorded at signin
///
/// Every request is evaluated from scratch; nothing is cached.
pub struct AuthGuard<US, TR>
where
    US: UserServicePort,
    TR: TokenRegistry,
{
    user_service: Arc<US>,
    token_registry: Arc<TR>,
    require_handshake: bool,
}

impl<US, TR> AuthGuard<US, TR>
where
    US: UserServicePort,
    TR: TokenRegistry,
{
    /// # Arguments
    /// * `require_handshake` - Reject sessions that never completed a handshake
    pub fn new(user_service: Arc<US>, token_registry: Arc<TR>, require_handshake: bool) -> Self {
        Self {
            user_service,
            token_registry,
            require_handshake,
        }
    }

    /// Decide whether a request may proceed and resolve its user.
    ///
    /// # Errors
    /// * `HandshakeFailed` - Nonce expected but absent or different
    /// * `MissingSessionUser` - Session has no authenticated user
    /// * `MissingBearerToken` - No usable `Authorization: Bearer` header
    /// * `InvalidToken` - Token not live for the user or not the session's token
    /// * `StorageError` - Store lookup failed
    pub async fn authenticate(
        &self,
        session: &Session,
        credentials: &RequestCredentials,
    ) -> Result<User, GuardError> {
        let mut stage = GuardStage::Unauthenticated;

        let result = self.evaluate(session, credentials, &mut stage).await;
        match &result {
            Ok(user) => tracing::debug!(email = %user.email, "Request authenticated"),
            Err(e) if e.is_rejection() => {
                tracing::warn!(reason = %e, stage = ?stage, "Request rejected by guard")
            }
            Err(e) => tracing::error!(error = %e, stage = ?stage, "Guard lookup failed"),
        }

        result
    }

    async fn evaluate(
        &self,
        session: &Session,
        credentials: &RequestCredentials,
        stage: &mut GuardStage,
    ) -> Result<User, GuardError> {
        match &session.handshake {
            Some(nonce) => {
                let presented = credentials.handshake.as_deref().unwrap_or_default();
                if !nonce.matches(presented) {
                    return Err(GuardError::HandshakeFailed);
                }
            }
            None if self.require_handshake => return Err(GuardError::HandshakeFailed),
            None => {}
        }
        *stage = GuardStage::HandshakeVerified;

        let email = session
            .user
            .as_ref()
            .ok_or(GuardError::MissingSessionUser)?;
        *stage = GuardStage::SessionBound;

        let token = credentials
            .bearer_token()
            .ok_or(GuardError::MissingBearerToken)?;

        if !self.token_registry.validate(email, &token).await? {
            return Err(GuardError::InvalidToken);
        }
        if let Some(recorded) = &session.token {
            if !recorded.matches(&token) {
                return Err(GuardError::InvalidToken);
            }
        }

        let user = self
            .user_service
            .find_user(email)
            .await?
            .ok_or(GuardError::InvalidToken)?;
        *stage = GuardStage::Authenticated;

        Ok(user)
    }
}
