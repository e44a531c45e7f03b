use thiserror::Error;

use crate::session::SessionError;

/// Top-level error for access gate operations.
#[derive(Debug, Clone, Error)]
pub enum GateError {
    #[error("Invalid secured URL pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Session store error: {0}")]
    Store(#[from] SessionError),
}
