use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Public landing page, also the target of denial redirects.
pub async fn home(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<HomeResponseData>, ApiError> {
    let principal = state.gate.principal(&headers).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        HomeResponseData {
            service: env!("CARGO_PKG_NAME").to_string(),
            username: principal.map(|principal| principal.to_string()),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeResponseData {
    pub service: String,
    /// Signed-in user, if any
    pub username: Option<String>,
}
