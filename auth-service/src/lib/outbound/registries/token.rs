use std::collections::HashMap;
use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::token::errors::TokenError;
use crate::domain::token::models::BearerToken;
use crate::domain::token::ports::TokenRegistry;
use crate::domain::user::models::EmailAddress;

#[derive(Debug, Default)]
struct Tokens {
    /// token -> owning email, for global uniqueness
    owners: HashMap<BearerToken, EmailAddress>,
    /// email -> live tokens
    by_user: HashMap<EmailAddress, HashSet<BearerToken>>,
}

/// Token registry held in process memory.
///
/// Both indexes sit behind a single lock, so issuing and revoking are
/// atomic with respect to each other.
#[derive(Debug, Default)]
pub struct InMemoryTokenRegistry {
    tokens: RwLock<Tokens>,
}

impl InMemoryTokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live tokens for `email`.
    pub async fn live_tokens(&self, email: &EmailAddress) -> usize {
        self.tokens
            .read()
            .await
            .by_user
            .get(email)
            .map(|tokens| tokens.len())
            .unwrap_or(0)
    }
}

#[async_trait]
impl TokenRegistry for InMemoryTokenRegistry {
    async fn issue(&self, email: &EmailAddress) -> Result<BearerToken, TokenError> {
        let mut tokens = self.tokens.write().await;

        let token = loop {
            let candidate = BearerToken::generate();
            if !tokens.owners.contains_key(&candidate) {
                break candidate;
            }
            tracing::warn!("Generated token collided with a live token, drawing again");
        };

        tokens.owners.insert(token.clone(), email.clone());
        tokens
            .by_user
            .entry(email.clone())
            .or_default()
            .insert(token.clone());

        tracing::debug!(email = %email, "Token issued");
        Ok(token)
    }

    async fn validate(
        &self,
        email: &EmailAddress,
        token: &BearerToken,
    ) -> Result<bool, TokenError> {
        let tokens = self.tokens.read().await;

        Ok(tokens
            .by_user
            .get(email)
            .is_some_and(|live| live.contains(token)))
    }

    async fn revoke_all(&self, email: &EmailAddress) -> Result<usize, TokenError> {
        let mut tokens = self.tokens.write().await;

        let revoked = tokens.by_user.remove(email).unwrap_or_default();
        for token in &revoked {
            tokens.owners.remove(token);
        }

        tracing::debug!(email = %email, revoked = revoked.len(), "Tokens revoked");
        Ok(revoked.len())
    }
}
