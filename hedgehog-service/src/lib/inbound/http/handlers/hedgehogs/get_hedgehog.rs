use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_hedgehog_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::HedgehogData;
use crate::inbound::http::router::AppState;

pub async fn get_hedgehog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<HedgehogData>, ApiError> {
    let id = parse_hedgehog_id(&id)?;

    state
        .hedgehog_service
        .get_hedgehog(&id)
        .await
        .map_err(ApiError::from)
        .map(|ref hedgehog| ApiSuccess::new(StatusCode::OK, hedgehog.into()))
}
