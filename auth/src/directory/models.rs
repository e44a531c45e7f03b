/// Principal record as held by a directory.
///
/// Pairs a username with its encoded credential. Read-only to the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    username: String,
    password: String,
}

impl UserDetails {
    /// Create a record from a username and an already encoded password.
    pub fn new(username: impl Into<String>, encoded_password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: encoded_password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Encoded credential, never the raw secret.
    pub fn password(&self) -> &str {
        &self.password
    }
}
