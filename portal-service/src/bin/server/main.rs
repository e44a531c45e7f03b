use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use auth::Argon2PasswordVerifier;
use auth::PasswordVerifier;
use portal_service::config::Config;
use portal_service::gate::build_gate;
use portal_service::inbound::http::router::create_router;
use portal_service::outbound::sessions::session_store_from_config;
use portal_service::outbound::sessions::spawn_session_purge;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // `portal-service hash-password <password>` prints a hash for the [[users]] config
    let mut args = std::env::args().skip(1);
    if args.next().as_deref() == Some("hash-password") {
        let password = args
            .next()
            .context("usage: portal-service hash-password <password>")?;
        println!("{}", Argon2PasswordVerifier::new().encode(&password)?);
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal_service=debug,auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "portal-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        session_name = %config.session.name,
        secured_urls = ?config.access.secured_urls,
        denial = ?config.access.denial,
        users = config.users.len(),
        "Configuration loaded"
    );

    let session_store = Arc::new(session_store_from_config(&config.session));
    let gate = Arc::new(build_gate(&config, Arc::clone(&session_store))?);

    let purge_task = spawn_session_purge(
        session_store,
        Duration::from_secs(config.session.purge_interval_seconds),
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(gate))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    purge_task.abort();
    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
