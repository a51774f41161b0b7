use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::ImageUrl;
use crate::domain::profile::models::UpdateProfileCommand;
use crate::inbound::http::handlers::explicit_null;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ProfileData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for a partial profile update (raw JSON)
///
/// Omitted fields are kept; `null` clears a field.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "explicit_null")]
    pub full_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub phone_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub image: Option<Option<String>>,
}

impl UpdateProfileRequest {
    fn try_into_command(self) -> Result<UpdateProfileCommand, ProfileError> {
        let image = self
            .image
            .map(|image| image.map(ImageUrl::new).transpose())
            .transpose()?;

        Ok(UpdateProfileCommand {
            full_name: self.full_name,
            phone_number: self.phone_number,
            bio: self.bio,
            image,
        })
    }
}

pub async fn update_own_profile(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .profile_service
        .update_own_profile(&principal.id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}
