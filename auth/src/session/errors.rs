use thiserror::Error;

/// Error type for session store operations.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),

    #[error("Session serialization failed: {0}")]
    Serialization(String),
}
