use async_trait::async_trait;
use axum::extract::Request;
use axum::response::Response;

/// Produces the response for a request denied by the gate.
#[async_trait]
pub trait AccessDeniedHandler: Send + Sync + 'static {
    async fn handle(&self, request: Request) -> Response;
}
