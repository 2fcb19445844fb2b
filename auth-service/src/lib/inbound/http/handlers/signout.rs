use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use serde::Serialize;

use super::ApiSuccess;
use crate::domain::session::ports::SessionServicePort;
use crate::inbound::http::router::AppState;

/// Revoke the session user's tokens and drop the session cookie.
///
/// Always answers 200; a revocation failure is logged and the cookie is
/// removed regardless.
pub async fn signout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, ApiSuccess<SignoutResponseData>) {
    let session = state.session_cookie.load(&jar);

    if let Err(e) = state.session_service.sign_out(session).await {
        tracing::error!(error = %e, "Token revocation failed during signout");
    }

    (
        state.session_cookie.remove(jar),
        ApiSuccess::new(
            StatusCode::OK,
            SignoutResponseData {
                message: "Signout".to_string(),
            },
        ),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignoutResponseData {
    pub message: String,
}
