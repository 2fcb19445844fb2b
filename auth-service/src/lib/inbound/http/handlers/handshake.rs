use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::session::ports::SessionServicePort;
use crate::inbound::http::router::AppState;

/// Bind a fresh handshake nonce to the session.
///
/// Subsequent protected requests on this session must echo the nonce in
/// the `Handshake` header.
pub async fn handshake(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, ApiSuccess<HandshakeResponseData>), ApiError> {
    let session = state.session_cookie.load(&jar);
    let (nonce, session) = state.session_service.handshake(session).await?;
    let jar = state.session_cookie.store(jar, &session)?;

    Ok((
        jar,
        ApiSuccess::new(
            StatusCode::OK,
            HandshakeResponseData {
                handshake: nonce.as_str().to_string(),
            },
        ),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandshakeResponseData {
    pub handshake: String,
}
