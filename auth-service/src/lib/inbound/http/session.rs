use auth::SealError;
use auth::SessionSealer;
use axum::http::header;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;
use axum_extra::extract::CookieJar;

use crate::domain::guard::models::RequestCredentials;
use crate::domain::session::models::Session;

/// Header carrying the handshake nonce on protected requests.
pub const HANDSHAKE_HEADER: &str = "handshake";

/// Moves the session between requests inside a sealed client cookie.
///
/// The server keeps no session state: whatever the client presents is
/// trusted only after the seal verifies.
pub struct SessionCookie {
    sealer: SessionSealer,
    name: String,
    secure: bool,
}

impl SessionCookie {
    /// # Arguments
    /// * `sealer` - Signs and verifies cookie values
    /// * `name` - Cookie name
    /// * `secure` - Restrict the cookie to HTTPS
    pub fn new(sealer: SessionSealer, name: impl Into<String>, secure: bool) -> Self {
        Self {
            sealer,
            name: name.into(),
            secure,
        }
    }

    /// Read the session from the jar.
    ///
    /// A missing, tampered or expired cookie yields an empty session.
    pub fn load(&self, jar: &CookieJar) -> Session {
        let Some(cookie) = jar.get(&self.name) else {
            return Session::default();
        };

        match self.sealer.open::<Session>(cookie.value()) {
            Ok(session) => session,
            Err(SealError::Expired) => {
                tracing::debug!("Session cookie expired");
                Session::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unverifiable session cookie");
                Session::default()
            }
        }
    }

    /// Write the session back into the jar, or remove the cookie when the
    /// session is empty.
    ///
    /// # Errors
    /// * `SealingFailed` - Session could not be sealed
    pub fn store(&self, jar: CookieJar, session: &Session) -> Result<CookieJar, SealError> {
        if session.is_empty() {
            return Ok(self.remove(jar));
        }

        let sealed = self.sealer.seal(session)?;
        let cookie = Cookie::build((self.name.clone(), sealed))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure);

        Ok(jar.add(cookie))
    }

    pub fn remove(&self, jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build((self.name.clone(), "")).path("/"))
    }
}

/// Collect the `Authorization` and `Handshake` header values of a request.
pub fn request_credentials(headers: &HeaderMap) -> RequestCredentials {
    let read = |name| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    RequestCredentials::new(read(header::AUTHORIZATION.as_str()), read(HANDSHAKE_HEADER))
}
