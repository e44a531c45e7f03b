use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Current gate configuration, for operators.
pub async fn get_access(
    State(state): State<AppState>,
) -> Result<ApiSuccess<AccessResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        AccessResponseData {
            session_name: state.gate.session_name().to_string(),
            secured_urls: state
                .gate
                .secured_urls()
                .patterns()
                .map(str::to_string)
                .collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessResponseData {
    pub session_name: String,
    pub secured_urls: Vec<String>,
}
