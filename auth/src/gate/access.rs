use std::sync::Arc;

use axum::extract::Request;
use axum::http::header;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::denied::AccessDeniedHandler;
use super::errors::GateError;
use super::models::Decision;
use super::models::Principal;
use super::models::AUTHENTICATED_PRINCIPAL;
use super::path::clean_path;
use super::path::SecuredUrls;
use crate::directory::InMemoryDirectory;
use crate::directory::PrincipalDirectory;
use crate::password::Argon2PasswordVerifier;
use crate::password::PasswordVerifier;
use crate::session::MemorySessionStore;
use crate::session::Session;
use crate::session::SessionStore;

/// Session name used by [`AccessGate::basic`].
pub const DEFAULT_SESSION_NAME: &str = "sessionName";

/// Request-level authentication gate.
///
/// Decides for every request whether it may reach the downstream handler,
/// and manages the authenticated principal stored in the caller's session.
/// Holds only read-only configuration and is shared across requests.
pub struct AccessGate<S, D, V>
where
    S: SessionStore,
    D: PrincipalDirectory,
    V: PasswordVerifier,
{
    store: Arc<S>,
    session_name: String,
    secured_urls: SecuredUrls,
    password_verifier: Arc<V>,
    directory: Arc<D>,
    access_denied_handler: Option<Arc<dyn AccessDeniedHandler>>,
}

impl AccessGate<MemorySessionStore, InMemoryDirectory, Argon2PasswordVerifier> {
    /// Gate with an in-memory store, an empty directory and no secured URLs.
    pub fn basic() -> Self {
        Self {
            store: Arc::new(MemorySessionStore::new()),
            session_name: DEFAULT_SESSION_NAME.to_string(),
            secured_urls: SecuredUrls::default(),
            password_verifier: Arc::new(Argon2PasswordVerifier::new()),
            directory: Arc::new(InMemoryDirectory::new()),
            access_denied_handler: None,
        }
    }
}

impl<S, D, V> AccessGate<S, D, V>
where
    S: SessionStore,
    D: PrincipalDirectory,
    V: PasswordVerifier,
{
    /// Create a new gate with injected collaborators.
    ///
    /// # Arguments
    /// * `store` - Session persistence
    /// * `session_name` - Name addressing the session in the store
    /// * `secured_urls` - Ordered regular expressions of paths requiring authentication
    /// * `password_verifier` - Credential comparator
    /// * `directory` - Principal lookup
    ///
    /// # Errors
    /// * `InvalidPattern` - A secured URL pattern does not compile
    pub fn new<I, P>(
        store: Arc<S>,
        session_name: impl Into<String>,
        secured_urls: I,
        password_verifier: Arc<V>,
        directory: Arc<D>,
    ) -> Result<Self, GateError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Ok(Self {
            store,
            session_name: session_name.into(),
            secured_urls: SecuredUrls::new(secured_urls)?,
            password_verifier,
            directory,
            access_denied_handler: None,
        })
    }

    /// Replace the default redirect with a custom denial response.
    pub fn with_access_denied_handler(mut self, handler: impl AccessDeniedHandler) -> Self {
        self.access_denied_handler = Some(Arc::new(handler));
        self
    }

    pub fn session_name(&self) -> &str {
        &self.session_name
    }

    pub fn secured_urls(&self) -> &SecuredUrls {
        &self.secured_urls
    }

    /// Decide whether a request may proceed.
    ///
    /// Paths outside the secured set are allowed without touching the store.
    ///
    /// # Arguments
    /// * `path` - Raw request path
    /// * `headers` - Request headers carrying the session reference
    ///
    /// # Errors
    /// * `Store` - Session lookup failed for a secured path
    pub async fn decide(&self, path: &str, headers: &HeaderMap) -> Result<Decision, GateError> {
        let path = clean_path(path);
        if !self.secured_urls.is_secured(&path) {
            return Ok(Decision::Allow);
        }

        let session = self.store.get(headers, &self.session_name).await?;
        match principal_of(&session) {
            Some(_) => Ok(Decision::Allow),
            None => {
                tracing::debug!(path = %path, "Unauthenticated request to secured path");
                Ok(Decision::Denied)
            }
        }
    }

    /// Run the access decision and either forward the request or deny it.
    ///
    /// A denied request never reaches `next`. Store failures deny.
    pub async fn handle(&self, request: Request, next: Next) -> Response {
        let (parts, body) = request.into_parts();
        let decision = match self.decide(parts.uri.path(), &parts.headers).await {
            Ok(decision) => decision,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    path = %parts.uri.path(),
                    "Access decision failed, denying request"
                );
                Decision::Denied
            }
        };

        let request = Request::from_parts(parts, body);
        match decision {
            Decision::Allow => next.run(request).await,
            Decision::Denied => self.deny(request).await,
        }
    }

    async fn deny(&self, request: Request) -> Response {
        match &self.access_denied_handler {
            Some(handler) => handler.handle(request).await,
            None => (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response(),
        }
    }

    /// Verify credentials and bind the principal to the caller's session.
    ///
    /// # Arguments
    /// * `request_headers` - Headers of the login request
    /// * `response_headers` - Receives the session cookie on success
    /// * `username` - Username to look up
    /// * `raw_password` - Plaintext password to verify
    ///
    /// # Returns
    /// True if the user was authenticated; false for an unknown user or a
    /// wrong password, in which case the session is left untouched
    ///
    /// # Errors
    /// * `Store` - Session could not be loaded or saved
    pub async fn authenticate_user(
        &self,
        request_headers: &HeaderMap,
        response_headers: &mut HeaderMap,
        username: &str,
        raw_password: &str,
    ) -> Result<bool, GateError> {
        let user_details = match self.directory.load_user_by_username(username).await {
            Ok(Some(user_details)) => user_details,
            Ok(None) => {
                tracing::warn!(username = %username, "Login rejected: unknown user");
                return Ok(false);
            }
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "Login rejected: directory lookup failed");
                return Ok(false);
            }
        };

        if !self
            .password_verifier
            .matches(raw_password, user_details.password())
        {
            tracing::warn!(username = %username, "Login rejected: credential mismatch");
            return Ok(false);
        }

        let mut session = self.store.get(request_headers, &self.session_name).await?;
        if session.is_expired() {
            tracing::warn!(
                username = %username,
                max_age = session.max_age(),
                "Login rejected: session store issues expired sessions"
            );
            return Ok(false);
        }
        session.insert(AUTHENTICATED_PRINCIPAL, user_details.username());
        self.store.save(&session, response_headers).await?;

        tracing::info!(
            username = %user_details.username(),
            session_name = %self.session_name,
            "User authenticated"
        );
        Ok(true)
    }

    /// Remove the principal and expire the caller's session.
    ///
    /// The same session record is expired and saved, so the store drops it and
    /// the client's reference becomes invalid. Safe to call repeatedly.
    ///
    /// # Errors
    /// * `Store` - Session could not be loaded or saved
    pub async fn clear_authentication(
        &self,
        request_headers: &HeaderMap,
        response_headers: &mut HeaderMap,
    ) -> Result<(), GateError> {
        let mut session = self.store.get(request_headers, &self.session_name).await?;
        let principal = session.remove(AUTHENTICATED_PRINCIPAL);
        session.expire();
        self.store.save(&session, response_headers).await?;

        tracing::info!(
            session_name = %self.session_name,
            had_principal = principal.is_some(),
            "Authentication cleared"
        );
        Ok(())
    }

    /// Principal bound to the caller's session, if any.
    ///
    /// # Errors
    /// * `Store` - Session could not be loaded
    pub async fn principal(&self, headers: &HeaderMap) -> Result<Option<Principal>, GateError> {
        let session = self.store.get(headers, &self.session_name).await?;
        Ok(principal_of(&session))
    }
}

fn principal_of(session: &Session) -> Option<Principal> {
    session
        .get(AUTHENTICATED_PRINCIPAL)
        .and_then(|value| value.as_str())
        .map(Principal::new)
}
