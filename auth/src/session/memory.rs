use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::header;
use axum::http::HeaderMap;
use axum::http::HeaderValue;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use cookie::time;
use cookie::Cookie;
use cookie::SameSite;
use serde_json::Value;
use tokio::sync::RwLock;

use super::errors::SessionError;
use super::models::Session;
use super::ports::SessionStore;

/// Attributes of the session cookie written on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    pub path: String,
    /// Default lifetime in seconds for new sessions; 0 issues a browser-session cookie
    pub max_age: i64,
    pub secure: bool,
    pub http_only: bool,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            max_age: 86_400,
            secure: false,
            http_only: true,
        }
    }
}

#[derive(Debug, Clone)]
struct StoredSession {
    name: String,
    values: HashMap<String, Value>,
    max_age: i64,
    expires_at: Option<DateTime<Utc>>,
}

impl StoredSession {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Session store holding records in process memory.
///
/// The client holds only the session id, in a cookie named after the session.
/// Ids that are unknown or expired are never adopted: the caller gets a new
/// session with a fresh id instead.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    /// Map of session_id -> stored record
    records: Arc<RwLock<HashMap<String, StoredSession>>>,
    options: CookieOptions,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CookieOptions) -> Self {
        Self {
            records: Arc::default(),
            options,
        }
    }

    pub fn options(&self) -> &CookieOptions {
        &self.options
    }

    /// Drop every expired record.
    ///
    /// # Returns
    /// Number of records removed
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| !record.is_expired(now));
        before - records.len()
    }

    /// Number of live and not-yet-purged records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn session_id_from(headers: &HeaderMap, name: &str) -> Option<String> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| Cookie::split_parse(value))
            .filter_map(Result::ok)
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value().to_string())
    }

    fn set_cookie(
        &self,
        headers: &mut HeaderMap,
        name: &str,
        value: &str,
        max_age: Option<i64>,
    ) -> Result<(), SessionError> {
        let mut builder = Cookie::build((name.to_string(), value.to_string()))
            .path(self.options.path.clone())
            .http_only(self.options.http_only)
            .secure(self.options.secure)
            .same_site(SameSite::Lax);
        if let Some(seconds) = max_age {
            builder = builder.max_age(time::Duration::seconds(seconds));
        }

        let value = HeaderValue::from_str(&builder.build().to_string())
            .map_err(|e| SessionError::Serialization(e.to_string()))?;
        headers.append(header::SET_COOKIE, value);
        Ok(())
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, headers: &HeaderMap, name: &str) -> Result<Session, SessionError> {
        if let Some(session_id) = Self::session_id_from(headers, name) {
            let records = self.records.read().await;
            match records.get(&session_id) {
                Some(record) if record.name == name && !record.is_expired(Utc::now()) => {
                    return Ok(Session::restore(
                        session_id,
                        name,
                        record.values.clone(),
                        record.max_age,
                    ));
                }
                _ => tracing::debug!(session_name = name, "Unknown or expired session id"),
            }
        }

        Ok(Session::new(name, self.options.max_age))
    }

    async fn save(&self, session: &Session, headers: &mut HeaderMap) -> Result<(), SessionError> {
        if session.is_expired() {
            self.records.write().await.remove(session.id());
            return self.set_cookie(headers, session.name(), "", Some(0));
        }

        let expires_at = (session.max_age() > 0)
            .then(|| Utc::now() + Duration::seconds(session.max_age()));
        let record = StoredSession {
            name: session.name().to_string(),
            values: session.values().clone(),
            max_age: session.max_age(),
            expires_at,
        };
        self.records
            .write()
            .await
            .insert(session.id().to_string(), record);

        let max_age = (session.max_age() > 0).then_some(session.max_age());
        self.set_cookie(headers, session.name(), session.id(), max_age)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// Turn the Set-Cookie headers of a response into a request Cookie header.
    fn cookie_header_from(response: &HeaderMap) -> HeaderMap {
        let pairs: Vec<String> = response
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|value| Cookie::parse(value.to_str().unwrap().to_string()).unwrap())
            .map(|cookie| format!("{}={}", cookie.name(), cookie.value()))
            .collect();

        let mut request = HeaderMap::new();
        request.insert(
            header::COOKIE,
            HeaderValue::from_str(&pairs.join("; ")).unwrap(),
        );
        request
    }

    fn set_cookie_of(response: &HeaderMap) -> Cookie<'static> {
        let raw = response
            .get(header::SET_COOKIE)
            .expect("Missing Set-Cookie header")
            .to_str()
            .unwrap()
            .to_string();
        Cookie::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_get_without_cookie_creates_session() {
        let store = MemorySessionStore::new();

        let session = store.get(&HeaderMap::new(), "portal").await.unwrap();

        assert!(session.is_new());
        assert_eq!(session.name(), "portal");
        assert_eq!(session.max_age(), 86_400);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_save_then_get_restores_values() {
        let store = MemorySessionStore::new();
        let mut session = store.get(&HeaderMap::new(), "portal").await.unwrap();
        session.insert("AUTH_PRINCIPAL", "alice");

        let mut response = HeaderMap::new();
        store.save(&session, &mut response).await.unwrap();

        let cookie = set_cookie_of(&response);
        assert_eq!(cookie.name(), "portal");
        assert_eq!(cookie.value(), session.id());
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(86_400)));

        let restored = store
            .get(&cookie_header_from(&response), "portal")
            .await
            .unwrap();
        assert!(!restored.is_new());
        assert_eq!(restored.id(), session.id());
        assert_eq!(restored.get("AUTH_PRINCIPAL"), Some(&json!("alice")));
    }

    #[tokio::test]
    async fn test_unknown_session_id_is_not_adopted() {
        let store = MemorySessionStore::new();
        let mut request = HeaderMap::new();
        request.insert(header::COOKIE, HeaderValue::from_static("portal=forged-id"));

        let session = store.get(&request, "portal").await.unwrap();

        assert!(session.is_new());
        assert_ne!(session.id(), "forged-id");
    }

    #[tokio::test]
    async fn test_session_name_must_match() {
        let store = MemorySessionStore::new();
        let session = Session::new("portal", 600);
        let mut response = HeaderMap::new();
        store.save(&session, &mut response).await.unwrap();

        let mut request = HeaderMap::new();
        let forged = format!("other={}", session.id());
        request.insert(header::COOKIE, HeaderValue::from_str(&forged).unwrap());

        let fetched = store.get(&request, "other").await.unwrap();
        assert!(fetched.is_new());
    }

    #[tokio::test]
    async fn test_save_expired_session_deletes_record() {
        let store = MemorySessionStore::new();
        let mut session = Session::new("portal", 600);
        let mut response = HeaderMap::new();
        store.save(&session, &mut response).await.unwrap();
        let request = cookie_header_from(&response);
        assert_eq!(store.len().await, 1);

        session.expire();
        let mut response = HeaderMap::new();
        store.save(&session, &mut response).await.unwrap();

        let cookie = set_cookie_of(&response);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
        assert!(store.is_empty().await);

        let fetched = store.get(&request, "portal").await.unwrap();
        assert!(fetched.is_new());
        assert_ne!(fetched.id(), session.id());
    }

    #[tokio::test]
    async fn test_browser_session_cookie_has_no_max_age() {
        let store = MemorySessionStore::with_options(CookieOptions {
            max_age: 0,
            secure: true,
            ..CookieOptions::default()
        });
        let session = store.get(&HeaderMap::new(), "portal").await.unwrap();
        let mut response = HeaderMap::new();
        store.save(&session, &mut response).await.unwrap();

        let cookie = set_cookie_of(&response);
        assert_eq!(cookie.max_age(), None);
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(store.purge_expired().await, 0);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let store = MemorySessionStore::new();
        store
            .records
            .write()
            .await
            .insert(
                "stale".to_string(),
                StoredSession {
                    name: "portal".to_string(),
                    values: HashMap::new(),
                    max_age: 1,
                    expires_at: Some(Utc::now() - Duration::seconds(5)),
                },
            );
        store
            .save(&Session::new("portal", 600), &mut HeaderMap::new())
            .await
            .unwrap();

        assert_eq!(store.purge_expired().await, 1);
        assert_eq!(store.len().await, 1);
    }
}
