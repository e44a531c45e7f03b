use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;

use crate::inbound::http::router::AppState;

/// Middleware running every request through the access gate before routing
pub async fn guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state.gate.handle(request, next).await
}
