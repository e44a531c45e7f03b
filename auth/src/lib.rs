//! Session-based authentication gate
//!
//! Decides per request whether the caller must be authenticated before the
//! request may reach application routing:
//! - Secured path matching (normalized paths against ordered regular expressions)
//! - Session lookup and the authenticated-principal marker
//! - Login and logout tied to a pluggable session store
//!
//! Collaborators are traits injected at construction, each with one canonical
//! implementation:
//! - [`PasswordVerifier`]: [`Argon2PasswordVerifier`]
//! - [`PrincipalDirectory`]: [`InMemoryDirectory`]
//! - [`SessionStore`]: [`MemorySessionStore`] (cookie-referenced)
//!
//! # Examples
//!
//! ## Password Encoding
//! ```
//! use auth::{Argon2PasswordVerifier, PasswordVerifier};
//!
//! let verifier = Argon2PasswordVerifier::new();
//! let encoded = verifier.encode("my_password").unwrap();
//! assert!(verifier.matches("my_password", &encoded));
//! assert!(!verifier.matches("not_my_password", &encoded));
//! ```
//!
//! ## Path Normalization
//! ```
//! use auth::clean_path;
//!
//! assert_eq!(clean_path(""), "/");
//! assert_eq!(clean_path("a/b/../c"), "/a/c");
//! assert_eq!(clean_path("/a/../../b"), "/b");
//! ```
//!
//! ## Login and Access Decision
//! ```
//! use std::sync::Arc;
//!
//! use auth::{AccessGate, Argon2PasswordVerifier, Decision, InMemoryDirectory};
//! use auth::{MemorySessionStore, PasswordVerifier, UserDetails};
//! use axum::http::{header, HeaderMap, HeaderValue};
//!
//! # tokio_test();
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn tokio_test() {
//! let verifier = Argon2PasswordVerifier::new();
//! let directory = InMemoryDirectory::from_users([UserDetails::new(
//!     "alice",
//!     verifier.encode("secret").unwrap(),
//! )]);
//! let gate = AccessGate::new(
//!     Arc::new(MemorySessionStore::new()),
//!     "portal",
//!     ["^/account"],
//!     Arc::new(verifier),
//!     Arc::new(directory),
//! )
//! .unwrap();
//!
//! let anonymous = HeaderMap::new();
//! assert_eq!(gate.decide("/account", &anonymous).await.unwrap(), Decision::Denied);
//!
//! let mut response = HeaderMap::new();
//! assert!(gate.authenticate_user(&anonymous, &mut response, "alice", "secret").await.unwrap());
//!
//! let set_cookie = response.get(header::SET_COOKIE).unwrap().to_str().unwrap();
//! let mut request = HeaderMap::new();
//! let pair = set_cookie.split(';').next().unwrap();
//! request.insert(header::COOKIE, HeaderValue::from_str(pair).unwrap());
//! assert_eq!(gate.decide("/account", &request).await.unwrap(), Decision::Allow);
//! # }
//! ```

pub mod directory;
pub mod gate;
pub mod password;
pub mod session;

// Re-export commonly used items
pub use directory::DirectoryError;
pub use directory::InMemoryDirectory;
pub use directory::PrincipalDirectory;
pub use directory::UserDetails;
pub use gate::clean_path;
pub use gate::AccessDeniedHandler;
pub use gate::AccessGate;
pub use gate::Decision;
pub use gate::GateError;
pub use gate::Principal;
pub use gate::SecuredUrls;
pub use gate::AUTHENTICATED_PRINCIPAL;
pub use password::Argon2PasswordVerifier;
pub use password::PasswordError;
pub use password::PasswordVerifier;
pub use session::CookieOptions;
pub use session::MemorySessionStore;
pub use session::Session;
pub use session::SessionError;
pub use session::SessionStore;
