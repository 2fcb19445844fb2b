use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde::Serialize;

use super::require;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::session::models::SignInCommand;
use crate::domain::session::ports::SessionServicePort;
use crate::inbound::http::router::AppState;

/// Verify credentials and bind a freshly issued bearer token to the session.
///
/// The token is returned in the body and must be presented as
/// `Authorization: Bearer <token>` alongside the session cookie.
pub async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<SigninRequest>, JsonRejection>,
) -> Result<(CookieJar, ApiSuccess<SigninResponseData>), ApiError> {
    let Json(body) = payload?;
    let command = body.try_into_command()?;

    let session = state.session_cookie.load(&jar);
    let (token, session) = state.session_service.sign_in(command, session).await?;
    let jar = state.session_cookie.store(jar, &session)?;

    Ok((
        jar,
        ApiSuccess::new(
            StatusCode::OK,
            SigninResponseData {
                token: token.as_str().to_string(),
            },
        ),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SigninRequest {
    email: Option<String>,
    password: Option<String>,
}

impl SigninRequest {
    fn try_into_command(self) -> Result<SignInCommand, ApiError> {
        let email = require("email", self.email)?;
        let password = require("password", self.password)?;
        Ok(SignInCommand::new(email, password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigninResponseData {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_password() {
        let request = SigninRequest {
            email: Some("u@x.com".to_string()),
            password: None,
        };

        assert_eq!(
            request.try_into_command().unwrap_err(),
            ApiError::BadRequest("Invalid parameter: password missing".to_string())
        );
    }

    #[test]
    fn test_email_kept_raw() {
        let command = SigninRequest {
            email: Some("not-an-email".to_string()),
            password: Some("p".to_string()),
        }
        .try_into_command()
        .unwrap();

        assert_eq!(command.email, "not-an-email");
    }
}
