use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<LoginRequestBody>,
) -> Result<(HeaderMap, ApiSuccess<LoginResponseData>), ApiError> {
    // Receives the session cookie on success
    let mut response_headers = HeaderMap::new();

    let authenticated = state
        .gate
        .authenticate_user(&headers, &mut response_headers, &body.username, &body.password)
        .await?;

    if !authenticated {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    Ok((
        response_headers,
        ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData {
                username: body.username,
            },
        ),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub username: String,
}
