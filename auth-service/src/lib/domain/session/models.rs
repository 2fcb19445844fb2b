use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::domain::token::models::BearerToken;
use crate::domain::user::models::EmailAddress;

/// One-time value bound to a session before signin.
///
/// A request on a session holding a nonce must echo it back in the
/// `Handshake` header, which defeats fixation of a session planted by a
/// third party.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandshakeNonce(String);

impl HandshakeNonce {
    pub fn generate() -> Self {
        Self(auth::token::generate_token())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Constant-time comparison against a presented header value.
    pub fn matches(&self, presented: &str) -> bool {
        auth::token::constant_time_eq(self.0.as_bytes(), presented.as_bytes())
    }
}

impl fmt::Debug for HandshakeNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HandshakeNonce(***)")
    }
}

/// Per-request session state carried by the client.
///
/// Starts empty, is populated by signin and handshake, and is wiped by
/// signout. The guard only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<EmailAddress>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<BearerToken>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handshake: Option<HandshakeNonce>,
}

impl Session {
    /// Bind the session to a signed-in user.
    ///
    /// Any handshake nonce established earlier is kept so the pre-signin
    /// handshake stays required for this session.
    pub fn signed_in(self, user: EmailAddress, token: BearerToken) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            handshake: self.handshake,
        }
    }

    pub fn with_handshake(self, handshake: HandshakeNonce) -> Self {
        Self {
            handshake: Some(handshake),
            ..self
        }
    }

    /// Drop every field.
    pub fn cleared(self) -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.token.is_none() && self.handshake.is_none()
    }
}

/// Command to sign in with raw credentials.
///
/// The email is kept unparsed so that malformed and unknown addresses fail
/// the same way as a wrong password.
#[derive(Debug)]
pub struct SignInCommand {
    pub email: String,
    pub password: String,
}

impl SignInCommand {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}
