use async_trait::async_trait;

use super::errors::DirectoryError;
use super::models::UserDetails;

/// Resolves usernames to principal records.
#[async_trait]
pub trait PrincipalDirectory: Send + Sync + 'static {
    /// Retrieve the principal record for a username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// Optional user details (None if the username is unknown)
    ///
    /// # Errors
    /// * `Unavailable` - Directory backend failed
    async fn load_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserDetails>, DirectoryError>;
}
