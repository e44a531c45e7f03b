use std::sync::Arc;

use auth::Argon2PasswordVerifier;
use auth::MemorySessionStore;
use auth::PasswordVerifier;
use portal_service::config::AccessConfig;
use portal_service::config::Config;
use portal_service::config::DenialMode;
use portal_service::config::ServerConfig;
use portal_service::config::SessionConfig;
use portal_service::config::UserConfig;
use portal_service::gate::build_gate;
use portal_service::inbound::http::router::create_router;

pub const SESSION_NAME: &str = "portal_session";
pub const USERNAME: &str = "nicola";
pub const PASSWORD: &str = "pass_word!";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub session_store: Arc<MemorySessionStore>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with(DenialMode::Redirect).await
    }

    /// Spawn the application with the given denial behaviour
    pub async fn spawn_with(denial: DenialMode) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let password_hash = Argon2PasswordVerifier::new()
            .encode(PASSWORD)
            .expect("Failed to hash password");

        let config = Config {
            server: ServerConfig { http_port: port },
            session: SessionConfig {
                name: SESSION_NAME.to_string(),
                max_age_seconds: 600,
                secure_cookie: false,
                purge_interval_seconds: 60,
            },
            access: AccessConfig {
                secured_urls: vec!["^/account".to_string(), "^/admin".to_string()],
                denial,
            },
            users: vec![UserConfig {
                username: USERNAME.to_string(),
                password_hash,
            }],
        };

        let session_store = Arc::new(MemorySessionStore::new());
        let gate = build_gate(&config, Arc::clone(&session_store)).expect("Failed to build gate");
        let router = create_router(Arc::new(gate));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: Self::client(),
            session_store,
        }
    }

    /// Client keeping cookies and leaving redirects unfollowed
    pub fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create reqwest client")
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(self.url(path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(self.url(path))
    }

    /// Helper to log in with the seeded account
    pub async fn login(&self) -> reqwest::Response {
        self.login_as(USERNAME, PASSWORD).await
    }

    /// Helper to log in with arbitrary credentials
    pub async fn login_as(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .json(&serde_json::json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
