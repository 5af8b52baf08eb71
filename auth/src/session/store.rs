use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

use super::errors::SessionError;

/// Opaque session identifier handed to the client.
///
/// This is the only value the client holds; everything else about the
/// session lives server-side in the [`SessionStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(SessionId)
            .map_err(|e| SessionError::InvalidId(e.to_string()))
    }
}

/// Server-side state for a single session.
#[derive(Debug, Clone)]
struct SessionRecord {
    /// Authenticated user id, or `None` for an anonymous session that only
    /// carries flash messages.
    user_id: Option<String>,
    /// One-time message consumed on the next read.
    flash: Option<String>,
    created_at: DateTime<Utc>,
}

impl SessionRecord {
    fn new(user_id: Option<String>) -> Self {
        Self {
            user_id,
            flash: None,
            created_at: Utc::now(),
        }
    }
}

/// Keyed in-process session store with an explicit lifecycle.
///
/// Sessions are created on login (or on demand to carry a flash message),
/// looked up on every request, and invalidated on logout. A session either
/// maps to exactly one user id or does not exist; there is no
/// half-authenticated state. Nothing is persisted, so all sessions vanish
/// on process exit.
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionId, SessionRecord>>,
}

impl SessionStore {
    /// Create an empty session store.
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Create an anonymous session.
    ///
    /// Used to carry a flash message across a redirect for a visitor who is
    /// not logged in. Nothing reaps unconsumed records, so the map grows
    /// with every fresh anonymous visitor until the process restarts;
    /// `created_at` is the hook for adding expiry.
    pub fn create(&self) -> SessionId {
        let id = SessionId::generate();
        self.sessions.lock().insert(id, SessionRecord::new(None));
        id
    }

    /// Establish an authenticated session for a user.
    ///
    /// Always issues a fresh identifier; callers rotate away from any
    /// previous anonymous session on login.
    pub fn establish(&self, user_id: &str) -> SessionId {
        let id = SessionId::generate();
        self.sessions
            .lock()
            .insert(id, SessionRecord::new(Some(user_id.to_string())));
        id
    }

    /// Look up the user id an authenticated session maps to.
    ///
    /// Returns `None` for unknown and for anonymous sessions.
    pub fn authenticated_user(&self, id: &SessionId) -> Option<String> {
        self.sessions
            .lock()
            .get(id)
            .and_then(|record| record.user_id.clone())
    }

    /// Whether a session with this id exists at all.
    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.lock().contains_key(id)
    }

    /// Tear down a session.
    ///
    /// # Errors
    /// * `UnknownSession` - No session with this id exists; the caller
    ///   decides how to surface the failure.
    pub fn destroy(&self, id: &SessionId) -> Result<(), SessionError> {
        self.sessions
            .lock()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| SessionError::UnknownSession(id.to_string()))
    }

    /// Attach a one-time flash message to a session.
    ///
    /// # Errors
    /// * `UnknownSession` - No session with this id exists
    pub fn set_flash(&self, id: &SessionId, message: &str) -> Result<(), SessionError> {
        let mut sessions = self.sessions.lock();
        let record = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::UnknownSession(id.to_string()))?;
        record.flash = Some(message.to_string());
        Ok(())
    }

    /// Consume the pending flash message, if any.
    ///
    /// The message is removed on read; a second call returns `None`.
    pub fn take_flash(&self, id: &SessionId) -> Option<String> {
        self.sessions
            .lock()
            .get_mut(id)
            .and_then(|record| record.flash.take())
    }

    /// When the session was created.
    pub fn created_at(&self, id: &SessionId) -> Option<DateTime<Utc>> {
        self.sessions.lock().get(id).map(|record| record.created_at)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
