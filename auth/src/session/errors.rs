use thiserror::Error;

/// Error type for session lifecycle operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid session identifier: {0}")]
    InvalidId(String),

    #[error("Unknown session: {0}")]
    UnknownSession(String),
}
