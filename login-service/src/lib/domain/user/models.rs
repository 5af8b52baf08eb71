use std::fmt;
use std::str::FromStr;

use chrono::Utc;

use crate::user::errors::EmailError;

/// User record held by the credential store.
///
/// Created on registration, never updated or deleted in-process, and gone
/// when the process exits.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: String,
}

/// Opaque unique user identifier.
///
/// Registration stamps new users with the current timestamp in
/// milliseconds; consumers treat the value as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Mint an identifier for a freshly registered user.
    pub fn generate() -> Self {
        Self(Utc::now().timestamp_millis().to_string())
    }

    /// Wrap an identifier received from a session lookup.
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address value type
///
/// Validates email format using RFC 5322 compliant parser. Stored and
/// compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub name: String,
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterUserCommand {
    /// Construct a new register user command.
    ///
    /// # Arguments
    /// * `name` - Display name (the original applies no validation here)
    /// * `email` - Validated email address
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(name: String, email: EmailAddress, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

/// Submitted login credentials.
///
/// The email stays a raw string: an address that never parses simply will
/// not match any stored user.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
