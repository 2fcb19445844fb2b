use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::require;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError> {
    let Json(body) = payload?;
    let command = body.try_into_command()?;

    state
        .user_service
        .create_user(command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for signup (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    email: Option<String>,
    name: Option<String>,
    password: Option<String>,
}

impl SignupRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ApiError> {
        let email = require("email", self.email)?;
        let name = require("name", self.name)?;
        let password = require("password", self.password)?;

        let email = EmailAddress::new(email).map_err(UserError::from)?;
        let name = UserName::new(name).map_err(UserError::from)?;

        Ok(CreateUserCommand::new(email, name, password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupResponseData {
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for SignupResponseData {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.as_str().to_string(),
            name: user.name.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: Option<&str>, name: Option<&str>, password: Option<&str>) -> SignupRequest {
        SignupRequest {
            email: email.map(str::to_string),
            name: name.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request() {
        let command = request(Some("u@x.com"), Some("U"), Some("p"))
            .try_into_command()
            .unwrap();

        assert_eq!(command.email.as_str(), "u@x.com");
        assert_eq!(command.name.as_str(), "U");
        assert_eq!(command.password, "p");
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        assert_eq!(
            request(None, None, None).try_into_command().unwrap_err(),
            ApiError::BadRequest("Invalid parameter: email missing".to_string())
        );
        assert_eq!(
            request(Some("u@x.com"), Some(""), Some("p"))
                .try_into_command()
                .unwrap_err(),
            ApiError::BadRequest("Invalid parameter: name missing".to_string())
        );
        assert_eq!(
            request(Some("u@x.com"), Some("U"), None)
                .try_into_command()
                .unwrap_err(),
            ApiError::BadRequest("Invalid parameter: password missing".to_string())
        );
    }

    #[test]
    fn test_response_carries_creation_time() {
        let user = User {
            email: EmailAddress::new("u@x.com".to_string()).unwrap(),
            name: UserName::new("U".to_string()).unwrap(),
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
        };

        let data = SignupResponseData::from(&user);
        assert_eq!(data.email, "u@x.com");
        assert_eq!(data.name, "U");
        assert_eq!(data.created_at, user.created_at);
    }

    #[test]
    fn test_malformed_email_is_bad_request() {
        let err = request(Some("not-an-email"), Some("U"), Some("p"))
            .try_into_command()
            .unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
