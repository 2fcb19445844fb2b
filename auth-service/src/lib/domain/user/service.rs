use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for credential store operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service backed by the given repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            email: command.email,
            name: command.name,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(
            email = %created_user.email,
            created_at = %created_user.created_at,
            "User created"
        );

        Ok(created_user)
    }

    async fn find_user(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        self.repository.find_by_email(email).await
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, UserError> {
        let user = match EmailAddress::new(email.to_string()) {
            Ok(email) => self.repository.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            self.password_hasher.verify_decoy(password)?;
            tracing::debug!("Credential check failed");
            return Err(UserError::InvalidCredentials);
        };

        if self.password_hasher.verify(password, &user.password_hash)? {
            Ok(user)
        } else {
            tracing::debug!("Credential check failed");
            Err(UserError::InvalidCredentials)
        }
    }
}
