use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::parse_hedgehog_id;
use crate::domain::hedgehog::errors::HedgehogError;
use crate::domain::hedgehog::models::Age;
use crate::domain::hedgehog::models::ColorType;
use crate::domain::hedgehog::models::HedgehogName;
use crate::domain::hedgehog::models::UpdateHedgehogCommand;
use crate::inbound::http::handlers::explicit_null;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::HedgehogData;
use crate::inbound::http::router::AppState;

/// HTTP request body for a partial hedgehog update (raw JSON)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateHedgehogRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub color_type: Option<Option<String>>,
}

impl UpdateHedgehogRequest {
    fn try_into_command(self) -> Result<UpdateHedgehogCommand, HedgehogError> {
        let color_type = self
            .color_type
            .map(|color_type| color_type.map(ColorType::new).transpose())
            .transpose()?;

        Ok(UpdateHedgehogCommand {
            name: self.name.map(HedgehogName::new).transpose()?,
            description: self.description,
            age: self.age.map(Age::new).transpose()?,
            color_type,
        })
    }
}

pub async fn update_hedgehog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateHedgehogRequest>,
) -> Result<ApiSuccess<HedgehogData>, ApiError> {
    let id = parse_hedgehog_id(&id)?;
    let command = body.try_into_command()?;

    state
        .hedgehog_service
        .update_hedgehog(&id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref hedgehog| ApiSuccess::new(StatusCode::OK, hedgehog.into()))
}
