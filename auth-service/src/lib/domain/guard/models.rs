use crate::domain::token::models::BearerToken;

/// The credentials a protected request presents, lifted out of its headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCredentials {
    /// Raw `Authorization` header value
    pub authorization: Option<String>,
    /// Raw `Handshake` header value
    pub handshake: Option<String>,
}

impl RequestCredentials {
    pub fn new(authorization: Option<String>, handshake: Option<String>) -> Self {
        Self {
            authorization,
            handshake,
        }
    }

    /// Extract the bearer token from the `Authorization` header.
    ///
    /// The scheme is matched case-insensitively. Other schemes and empty
    /// tokens yield `None`.
    pub fn bearer_token(&self) -> Option<BearerToken> {
        let value = self.authorization.as_deref()?.trim();
        let (scheme, token) = value.split_once(' ')?;

        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }

        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(BearerToken::from_presented(token))
        }
    }
}

/// Position reached by a request in the guard's linear check sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GuardStage {
    Unauthenticated,
    HandshakeVerified,
    SessionBound,
    Authenticated,
}
