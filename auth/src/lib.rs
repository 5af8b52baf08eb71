//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for web services:
//! - Password hashing (Argon2id)
//! - Server-side session management keyed by opaque session identifiers
//! - Authentication coordination (verify credentials, establish sessions)
//!
//! Each service defines its own authentication traits and adapts these implementations.
//! This avoids coupling services through shared domain logic while reducing code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Sessions
//! ```
//! use auth::SessionStore;
//!
//! let sessions = SessionStore::new();
//! let session_id = sessions.establish("user123");
//! assert_eq!(sessions.authenticated_user(&session_id).as_deref(), Some("user123"));
//! sessions.destroy(&session_id).unwrap();
//! assert!(sessions.authenticated_user(&session_id).is_none());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and establish a session
//! let session_id = auth.login("password123", &hash, "user123").unwrap();
//! assert_eq!(auth.sessions().authenticated_user(&session_id).as_deref(), Some("user123"));
//!
//! // Logout: explicit teardown, errors surface to the caller
//! auth.logout(&session_id).unwrap();
//! ```

pub mod authenticator;
pub mod password;
pub mod session;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use session::SessionError;
pub use session::SessionId;
pub use session::SessionStore;
