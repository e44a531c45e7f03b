use async_trait::async_trait;
use auth::AccessDeniedHandler;
use axum::extract::Request;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;

/// Answers denied requests with 401 and a JSON error body instead of a redirect.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnauthorizedJson;

#[async_trait]
impl AccessDeniedHandler for UnauthorizedJson {
    async fn handle(&self, request: Request) -> Response {
        tracing::debug!(path = %request.uri().path(), "Access denied");
        ApiError::Unauthorized("Authentication required".to_string()).into_response()
    }
}
