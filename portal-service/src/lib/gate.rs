use std::sync::Arc;

use auth::AccessGate;
use auth::Argon2PasswordVerifier;
use auth::GateError;
use auth::InMemoryDirectory;
use auth::MemorySessionStore;

use crate::config::Config;
use crate::config::DenialMode;
use crate::inbound::http::denied::UnauthorizedJson;
use crate::outbound::directory::directory_from_config;

/// Gate wired with the portal's concrete collaborators.
pub type PortalGate = AccessGate<MemorySessionStore, InMemoryDirectory, Argon2PasswordVerifier>;

/// Assemble the access gate from configuration.
///
/// # Arguments
/// * `config` - Loaded application configuration
/// * `store` - Session store shared with the purge task
///
/// # Errors
/// * `InvalidPattern` - A configured secured URL does not compile
pub fn build_gate(config: &Config, store: Arc<MemorySessionStore>) -> Result<PortalGate, GateError> {
    let gate = AccessGate::new(
        store,
        config.session.name.clone(),
        &config.access.secured_urls,
        Arc::new(Argon2PasswordVerifier::new()),
        Arc::new(directory_from_config(&config.users)),
    )?;

    Ok(match config.access.denial {
        DenialMode::Redirect => gate,
        DenialMode::Unauthorized => gate.with_access_denied_handler(UnauthorizedJson),
    })
}
