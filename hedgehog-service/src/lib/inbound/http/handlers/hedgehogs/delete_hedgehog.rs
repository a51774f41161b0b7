use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::parse_hedgehog_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_hedgehog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<DeletedHedgehogData>, ApiError> {
    let id = parse_hedgehog_id(&id)?;

    state
        .hedgehog_service
        .delete_hedgehog(&id)
        .await
        .map_err(ApiError::from)
        .map(|id| {
            ApiSuccess::new(
                StatusCode::OK,
                DeletedHedgehogData { id: id.to_string() },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedHedgehogData {
    pub id: String,
}
