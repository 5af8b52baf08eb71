use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::CredentialStore;

/// Process-lifetime, in-memory credential store.
///
/// A guarded append-only list: no durability, no indexes, reset on process
/// restart. Reads scan linearly, which is plenty for a demo-sized user set.
pub struct InMemoryCredentialStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn insert(&self, user: User) -> Result<User, UserError> {
        self.users.write().push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .iter()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .iter()
            .find(|user| user.id == *id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::models::EmailAddress;

    fn user(id: &str, email: &str) -> User {
        User {
            id: UserId::new(id.to_string()),
            name: "A".to_string(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_find_by_email() {
        let store = InMemoryCredentialStore::new();

        store
            .insert(user("1", "a@x.com"))
            .await
            .expect("Insert failed");

        let found = store
            .find_by_email("a@x.com")
            .await
            .expect("Lookup failed")
            .expect("User missing");
        assert_eq!(found.id.as_str(), "1");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_email_is_case_sensitive() {
        let store = InMemoryCredentialStore::new();

        store
            .insert(user("1", "a@x.com"))
            .await
            .expect("Insert failed");

        let found = store.find_by_email("A@X.COM").await.expect("Lookup failed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = InMemoryCredentialStore::new();

        store
            .insert(user("1", "a@x.com"))
            .await
            .expect("Insert failed");
        store
            .insert(user("2", "b@x.com"))
            .await
            .expect("Insert failed");

        let found = store
            .find_by_id(&UserId::new("2".to_string()))
            .await
            .expect("Lookup failed")
            .expect("User missing");
        assert_eq!(found.email.as_str(), "b@x.com");
    }

    #[tokio::test]
    async fn test_missing_user_is_none() {
        let store = InMemoryCredentialStore::new();

        assert!(store
            .find_by_email("nobody@x.com")
            .await
            .expect("Lookup failed")
            .is_none());
        assert!(store
            .find_by_id(&UserId::new("42".to_string()))
            .await
            .expect("Lookup failed")
            .is_none());
    }
}
