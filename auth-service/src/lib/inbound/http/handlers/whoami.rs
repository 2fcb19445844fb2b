use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;
use crate::inbound::http::session::request_credentials;

/// Protected endpoint returning the authenticated user.
pub async fn whoami(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<ApiSuccess<WhoamiResponseData>, ApiError> {
    let session = state.session_cookie.load(&jar);
    let credentials = request_credentials(&headers);

    state
        .guard
        .authenticate(&session, &credentials)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhoamiResponseData {
    pub email: String,
    pub name: String,
}

impl From<&User> for WhoamiResponseData {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.as_str().to_string(),
            name: user.name.as_str().to_string(),
        }
    }
}
