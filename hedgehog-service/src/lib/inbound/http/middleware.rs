use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Principal stored in request extensions once a bearer token resolves to a
/// live, active user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub email_verified: bool,
    pub is_active: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.as_str().to_string(),
            username: user.username.as_str().to_string(),
            email_verified: user.email_verified,
            is_active: user.is_active,
            is_superuser: user.is_superuser,
            created_at: user.timestamps.created_at,
            updated_at: user.timestamps.updated_at,
        }
    }
}

/// Middleware that resolves the bearer token to a user on every request
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let user = state
        .user_service
        .authenticate_bearer(authorization.as_deref())
        .await?;

    req.extensions_mut().insert(AuthenticatedUser::from(&user));

    Ok(next.run(req).await)
}
