use async_trait::async_trait;
use auth::SessionId;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for the authentication domain service.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// Hashes the password and appends the record to the credential store.
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Password hashing failed
    /// * `Storage` - Store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify submitted credentials and establish a session.
    ///
    /// Looks the user up by email, verifies the password, and on success
    /// establishes a fresh authenticated session.
    ///
    /// # Returns
    /// The authenticated user and the new session identifier
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this email
    /// * `IncorrectPassword` - Password does not match
    /// * `Password` - Password verification failed
    /// * `Storage` - Store operation failed
    async fn login(&self, credentials: Credentials) -> Result<(User, SessionId), UserError>;

    /// Resolve a user id carried by a session back to a user record.
    ///
    /// # Returns
    /// Optional user entity; `None` means the session degrades to anonymous
    ///
    /// # Errors
    /// * `Storage` - Store operation failed
    async fn find_user(&self, id: &UserId) -> Result<Option<User>, UserError>;
}

/// Persistence operations for user records.
///
/// In-memory today; the trait boundary lets a real datastore be substituted
/// without touching route logic.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Append a new user record.
    ///
    /// # Errors
    /// * `Storage` - Store operation failed
    async fn insert(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by email address (exact, case-sensitive match).
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Storage` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Storage` - Store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
}
