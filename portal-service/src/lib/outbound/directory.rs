use auth::InMemoryDirectory;
use auth::UserDetails;

use crate::config::UserConfig;

/// Build the principal directory from configured accounts.
pub fn directory_from_config(users: &[UserConfig]) -> InMemoryDirectory {
    InMemoryDirectory::from_users(
        users
            .iter()
            .map(|user| UserDetails::new(user.username.clone(), user.password_hash.clone())),
    )
}
