use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::access::get_access;
use super::handlers::home::home;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::profile::profile;
use super::middleware::guard;
use crate::gate::PortalGate;

#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<PortalGate>,
}

/// Build the application router with the access gate in front of every route.
///
/// Which routes require a session is decided by the gate's secured URL
/// patterns, not by the route table.
pub fn create_router(gate: Arc<PortalGate>) -> Router {
    let state = AppState { gate };

    let routes = Router::new()
        .route("/", get(home))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/account/profile", get(profile))
        .route("/admin/access", get(get_access));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    routes
        .layer(middleware::from_fn_with_state(state.clone(), guard))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
