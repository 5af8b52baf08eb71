use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::SessionId;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::CredentialStore;

/// Authentication domain service.
///
/// Concrete implementation of AuthServicePort with dependency injection.
/// Password hashing and verification are CPU-bound, so both run on the
/// blocking pool rather than stalling the request executor.
pub struct AuthService<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    authenticator: Arc<Authenticator>,
}

impl<S> AuthService<S>
where
    S: CredentialStore,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential persistence implementation
    /// * `authenticator` - Password hashing and session management
    pub fn new(store: Arc<S>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            store,
            authenticator,
        }
    }
}

#[async_trait]
impl<S> AuthServicePort for AuthService<S>
where
    S: CredentialStore,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Email uniqueness is enforced here; the store itself stays a dumb list
        if self
            .store
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
                .await
                .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))??;

        let user = User {
            id: UserId::generate(),
            name: command.name,
            email: command.email,
            password_hash,
        };

        self.store.insert(user).await
    }

    async fn login(&self, credentials: Credentials) -> Result<(User, SessionId), UserError> {
        let user = self
            .store
            .find_by_email(&credentials.email)
            .await?
            .ok_or(UserError::UserNotFound)?;

        let authenticator = Arc::clone(&self.authenticator);
        let password = credentials.password;
        let stored_hash = user.password_hash.clone();
        let user_id = user.id.to_string();

        let session_id = tokio::task::spawn_blocking(move || {
            authenticator.login(&password, &stored_hash, &user_id)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => UserError::IncorrectPassword,
            AuthenticationError::PasswordError(err) => UserError::Password(err),
        })?;

        Ok((user, session_id))
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, UserError> {
        self.store.find_by_id(id).await
    }
}
