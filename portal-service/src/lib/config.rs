use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Application configuration for portal-service.
///
/// Loaded from configuration files with environment variable overrides.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub access: AccessConfig,
    #[serde(default)]
    pub users: Vec<UserConfig>,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Session cookie and store configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Cookie name addressing the session
    pub name: String,
    pub max_age_seconds: i64,
    #[serde(default)]
    pub secure_cookie: bool,
    /// Interval between sweeps of expired sessions
    pub purge_interval_seconds: u64,
}

/// Secured paths and denial behaviour.
#[derive(Debug, Deserialize, Clone)]
pub struct AccessConfig {
    /// Ordered regular expressions of paths requiring authentication
    pub secured_urls: Vec<String>,
    #[serde(default)]
    pub denial: DenialMode,
}

/// Response given to unauthenticated requests for secured paths.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DenialMode {
    /// 302 to `/`
    #[default]
    Redirect,
    /// 401 with a JSON error body
    Unauthorized,
}

/// Account known to the portal.
#[derive(Debug, Deserialize, Clone)]
pub struct UserConfig {
    pub username: String,
    /// Argon2id PHC string
    pub password_hash: String,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SESSION__NAME, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: SESSION__SECURE_COOKIE=true overrides session.secure_cookie
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the session store and purge task cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.max_age_seconds < 0 {
            return Err(ConfigError::Message(format!(
                "session.max_age_seconds must not be negative, got {}",
                self.session.max_age_seconds
            )));
        }
        if self.session.purge_interval_seconds == 0 {
            return Err(ConfigError::Message(
                "session.purge_interval_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
