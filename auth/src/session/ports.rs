use async_trait::async_trait;
use axum::http::HeaderMap;

use super::errors::SessionError;
use super::models::Session;

/// Session persistence keyed by session name.
///
/// How a session is referenced by the client (cookie, header) is up to the store.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Fetch the session referenced by the request, or create an empty one.
    ///
    /// # Arguments
    /// * `headers` - Request headers carrying the client's session reference
    /// * `name` - Session name
    ///
    /// # Errors
    /// * `Unavailable` - Store backend failed
    async fn get(&self, headers: &HeaderMap, name: &str) -> Result<Session, SessionError>;

    /// Persist the session and write its client reference into the response.
    ///
    /// A session with a negative max age is deleted and its reference expired.
    ///
    /// # Errors
    /// * `Unavailable` - Store backend failed
    /// * `Serialization` - Client reference could not be encoded
    async fn save(&self, session: &Session, headers: &mut HeaderMap) -> Result<(), SessionError>;
}
