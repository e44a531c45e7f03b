use std::sync::Arc;
use std::time::Duration;

use auth::CookieOptions;
use auth::MemorySessionStore;
use tokio::task::JoinHandle;

use crate::config::SessionConfig;

/// Build the session store from configuration.
pub fn session_store_from_config(config: &SessionConfig) -> MemorySessionStore {
    MemorySessionStore::with_options(CookieOptions {
        max_age: config.max_age_seconds,
        secure: config.secure_cookie,
        ..CookieOptions::default()
    })
}

/// Periodically drop expired sessions from the store.
pub fn spawn_session_purge(store: Arc<MemorySessionStore>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately.
        interval.tick().await;

        loop {
            interval.tick().await;
            let purged = store.purge_expired().await;
            if purged > 0 {
                tracing::debug!(purged, "Expired sessions purged");
            }
        }
    })
}
