use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::inbound::http::handlers::AccessTokenData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Exchange an email and password for an access token.
///
/// Unknown email and wrong password produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<AccessTokenData>, ApiError> {
    let user = state
        .user_service
        .authenticate(&body.email, &body.password)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    let access_token = state.user_service.issue_token(&user)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AccessTokenData::bearer(access_token),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}
