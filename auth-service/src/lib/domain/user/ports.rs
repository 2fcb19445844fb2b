use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Port for credential store operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user, hashing the password before storage.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email, name, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `StorageError` - Storage operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Look up a user by email.
    ///
    /// # Returns
    /// Optional user entity (None if not registered)
    ///
    /// # Errors
    /// * `StorageError` - Storage operation failed
    async fn find_user(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Check an email/password pair.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    ///
    /// # Returns
    /// The matching user
    ///
    /// # Errors
    /// * `InvalidCredentials` - No such user or password mismatch
    /// * `Password` - Stored hash could not be checked
    /// * `StorageError` - Storage operation failed
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user; the uniqueness check and insert are atomic.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `StorageError` - Storage operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `StorageError` - Storage operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
}
