use thiserror::Error;

/// Error type for principal directory lookups.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("Principal directory unavailable: {0}")]
    Unavailable(String),
}
