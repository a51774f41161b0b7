pub mod hedgehogs;
pub mod profiles;
pub mod users;

use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::domain::hedgehog::errors::HedgehogError;
use crate::domain::hedgehog::models::Hedgehog;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::PublicProfile;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::user::errors::UserError;

const UNAUTHORIZED_MESSAGE: &str = "Could not validate credentials";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    /// Duplicate unique field; reported as a bad request.
    Conflict(String),
    Unauthorized,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized => {
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    Json(ApiResponseBody::new_error(
                        StatusCode::UNAUTHORIZED,
                        UNAUTHORIZED_MESSAGE.to_string(),
                    )),
                )
                    .into_response();
            }
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::UsernameAlreadyExists | UserError::EmailAlreadyExists => {
                ApiError::Conflict(err.to_string())
            }
            UserError::Unauthenticated(_) => ApiError::Unauthorized,
            UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::Credential(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::InvalidImage(_) => ApiError::UnprocessableEntity(err.to_string()),
            ProfileError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ProfileError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<HedgehogError> for ApiError {
    fn from(err: HedgehogError) -> Self {
        match err {
            HedgehogError::InvalidName(_)
            | HedgehogError::InvalidAge(_)
            | HedgehogError::InvalidColorType(_) => ApiError::UnprocessableEntity(err.to_string()),
            HedgehogError::MissingColorType => ApiError::BadRequest(err.to_string()),
            HedgehogError::NotFound(_) => ApiError::NotFound(err.to_string()),
            HedgehogError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Distinguish an absent field (`None`) from an explicit `null` (`Some(None)`).
///
/// Use together with `#[serde(default)]`.
pub(crate) fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessTokenData {
    pub access_token: String,
    pub token_type: String,
}

impl AccessTokenData {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileData {
    pub id: String,
    pub user_id: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Profile> for ProfileData {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            full_name: profile.full_name.clone(),
            phone_number: profile.phone_number.clone(),
            bio: profile.bio.clone(),
            image: profile.image.as_ref().map(|image| image.as_str().to_string()),
            created_at: profile.timestamps.created_at,
            updated_at: profile.timestamps.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicProfileData {
    #[serde(flatten)]
    pub profile: ProfileData,
    pub username: String,
    pub email: String,
}

impl From<&PublicProfile> for PublicProfileData {
    fn from(public: &PublicProfile) -> Self {
        Self {
            profile: (&public.profile).into(),
            username: public.username.as_str().to_string(),
            email: public.email.as_str().to_string(),
        }
    }
}

/// Public view of a user; credentials never leave the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub email: String,
    pub username: String,
    pub email_verified: bool,
    pub is_active: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub profile: Option<ProfileData>,
}

impl UserData {
    pub fn new(user: &AuthenticatedUser, profile: Option<&Profile>) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            username: user.username.clone(),
            email_verified: user.email_verified,
            is_active: user.is_active,
            is_superuser: user.is_superuser,
            created_at: user.created_at,
            updated_at: user.updated_at,
            profile: profile.map(ProfileData::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HedgehogData {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub age: f64,
    pub color_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Hedgehog> for HedgehogData {
    fn from(hedgehog: &Hedgehog) -> Self {
        Self {
            id: hedgehog.id.to_string(),
            name: hedgehog.name.as_str().to_string(),
            description: hedgehog.description.clone(),
            age: hedgehog.age.years(),
            color_type: hedgehog.color_type.as_str().to_string(),
            created_at: hedgehog.timestamps.created_at,
            updated_at: hedgehog.timestamps.updated_at,
        }
    }
}
