use async_trait::async_trait;

use crate::user::errors::UserError;
use crate::user::models::EmailAddress;
use crate::user::models::RegisterUserCommand;
use crate::user::models::User;
use crate::user::models::UserId;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user, hashing the supplied password.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - email is already registered
    /// * `Password` - password hashing failed
    /// * `DatabaseError` - store operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Retrieve a user by identifier.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `DatabaseError` - store operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve a user by email address (login lookup).
    ///
    /// # Errors
    /// * `NotFoundByEmail` - no user with this email
    /// * `DatabaseError` - store operation failed
    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate.
///
/// Single-record find/insert operations; each is individually atomic.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - email is already registered
    /// * `DatabaseError` - store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by identifier (None if not found).
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve a user by email (None if not found).
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}
