use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::HedgehogData;
use crate::inbound::http::router::AppState;

pub async fn list_hedgehogs(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<HedgehogData>>, ApiError> {
    let hedgehogs = state.hedgehog_service.list_hedgehogs().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        hedgehogs.iter().map(HedgehogData::from).collect(),
    ))
}
