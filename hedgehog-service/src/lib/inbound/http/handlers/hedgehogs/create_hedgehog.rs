use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::hedgehog::errors::HedgehogError;
use crate::domain::hedgehog::models::Age;
use crate::domain::hedgehog::models::ColorType;
use crate::domain::hedgehog::models::CreateHedgehogCommand;
use crate::domain::hedgehog::models::HedgehogName;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::HedgehogData;
use crate::inbound::http::router::AppState;

pub async fn create_hedgehog(
    State(state): State<AppState>,
    Json(body): Json<CreateHedgehogRequest>,
) -> Result<ApiSuccess<HedgehogData>, ApiError> {
    state
        .hedgehog_service
        .create_hedgehog(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref hedgehog| ApiSuccess::new(StatusCode::CREATED, hedgehog.into()))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateHedgehogRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
    age: f64,
    color_type: String,
}

impl CreateHedgehogRequest {
    fn try_into_command(self) -> Result<CreateHedgehogCommand, HedgehogError> {
        Ok(CreateHedgehogCommand {
            name: HedgehogName::new(self.name)?,
            description: self.description,
            age: Age::new(self.age)?,
            color_type: ColorType::new(self.color_type)?,
        })
    }
}
