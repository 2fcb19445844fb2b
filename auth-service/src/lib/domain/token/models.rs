use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Opaque bearer token proving a completed signin.
///
/// `Debug` and `Display` redact the value so tokens never reach logs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BearerToken(String);

impl BearerToken {
    /// Draw a fresh random token.
    pub fn generate() -> Self {
        Self(auth::token::generate_token())
    }

    /// Wrap a token presented by a client.
    pub fn from_presented(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare without short-circuiting on the first differing byte.
    pub fn matches(&self, other: &BearerToken) -> bool {
        auth::token::constant_time_eq(self.0.as_bytes(), other.0.as_bytes())
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
