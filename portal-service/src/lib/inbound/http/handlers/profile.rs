use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    // Unreachable without a principal while the path is secured
    let principal = state
        .gate
        .principal(&headers)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ProfileResponseData {
            username: principal.to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub username: String,
}
