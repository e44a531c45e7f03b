use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<(HeaderMap, ApiSuccess<LogoutResponseData>), ApiError> {
    // Receives the expired session cookie
    let mut response_headers = HeaderMap::new();

    state
        .gate
        .clear_authentication(&headers, &mut response_headers)
        .await?;

    Ok((
        response_headers,
        ApiSuccess::new(
            StatusCode::OK,
            LogoutResponseData {
                message: "Signed out".to_string(),
            },
        ),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseData {
    pub message: String,
}
