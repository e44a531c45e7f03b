use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::errors::DirectoryError;
use super::models::UserDetails;
use super::ports::PrincipalDirectory;

/// Directory backed by a fixed set of credentials held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    /// Map of username -> record
    users: Arc<RwLock<HashMap<String, UserDetails>>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory seeded with the given records.
    ///
    /// Later records replace earlier ones with the same username.
    pub fn from_users(users: impl IntoIterator<Item = UserDetails>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.username().to_string(), user))
            .collect();

        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Add or replace a record.
    pub async fn insert(&self, user: UserDetails) {
        self.users
            .write()
            .await
            .insert(user.username().to_string(), user);
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl PrincipalDirectory for InMemoryDirectory {
    async fn load_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserDetails>, DirectoryError> {
        Ok(self.users.read().await.get(username).cloned())
    }
}
