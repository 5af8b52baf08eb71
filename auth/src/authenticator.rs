use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::session::SessionError;
use crate::session::SessionId;
use crate::session::SessionStore;

/// Authentication coordinator combining password verification and session
/// establishment.
///
/// Provides high-level authentication operations by coordinating password
/// hashing and the server-side session store.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    sessions: SessionStore,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),
}

impl Authenticator {
    /// Create a new authenticator with an empty session store.
    pub fn new() -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            sessions: SessionStore::new(),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and establish an authenticated session.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `user_id` - User the session will map to
    ///
    /// # Returns
    /// Identifier of the freshly established session
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    pub fn login(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: &str,
    ) -> Result<SessionId, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.sessions.establish(user_id))
    }

    /// Tear down a session.
    ///
    /// # Errors
    /// * `SessionError` - The session did not exist; surfaced to the caller
    ///   rather than silently ignored
    pub fn logout(&self, session_id: &SessionId) -> Result<(), SessionError> {
        self.sessions.destroy(session_id)
    }

    /// Access the underlying session store.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_success() {
        let authenticator = Authenticator::new();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let session_id = authenticator
            .login(password, &hash, "user123")
            .expect("Login failed");

        assert_eq!(
            authenticator.sessions().authenticated_user(&session_id),
            Some("user123".to_string())
        );
    }

    #[test]
    fn test_login_invalid_password() {
        let authenticator = Authenticator::new();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.login("wrong_password", &hash, "user123");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_logout_destroys_session() {
        let authenticator = Authenticator::new();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");
        let session_id = authenticator
            .login("my_password", &hash, "user123")
            .expect("Login failed");

        authenticator.logout(&session_id).expect("Logout failed");
        assert!(authenticator
            .sessions()
            .authenticated_user(&session_id)
            .is_none());

        // A second logout is a teardown error, not a silent success
        assert!(authenticator.logout(&session_id).is_err());
    }
}
