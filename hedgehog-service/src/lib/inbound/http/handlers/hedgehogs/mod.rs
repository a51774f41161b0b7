pub mod create_hedgehog;
pub mod delete_hedgehog;
pub mod get_hedgehog;
pub mod list_hedgehogs;
pub mod update_hedgehog;

pub use create_hedgehog::create_hedgehog;
pub use delete_hedgehog::delete_hedgehog;
pub use get_hedgehog::get_hedgehog;
pub use list_hedgehogs::list_hedgehogs;
pub use update_hedgehog::update_hedgehog;
use uuid::Uuid;

use crate::domain::hedgehog::models::HedgehogId;
use crate::inbound::http::handlers::ApiError;

fn parse_hedgehog_id(raw: &str) -> Result<HedgehogId, ApiError> {
    Uuid::parse_str(raw)
        .map(HedgehogId)
        .map_err(|e| ApiError::BadRequest(format!("Invalid hedgehog id: {}", e)))
}
