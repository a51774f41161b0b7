use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::common::Timestamps;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::ImageUrl;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::ProfileId;
use crate::domain::profile::models::PublicProfile;
use crate::domain::profile::ports::ProfileRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

pub(crate) const PROFILE_COLUMNS: &str =
    "id, user_id, full_name, phone_number, bio, image, created_at, updated_at";

pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) fn row_to_profile(row: &PgRow) -> Result<Profile, ProfileError> {
        let image = row
            .try_get::<Option<String>, _>("image")
            .map_err(database_error)?
            .map(ImageUrl::new)
            .transpose()
            .map_err(invalid_column("image"))?;

        Ok(Profile {
            id: ProfileId(row.try_get("id").map_err(database_error)?),
            user_id: UserId(row.try_get("user_id").map_err(database_error)?),
            full_name: row.try_get("full_name").map_err(database_error)?,
            phone_number: row.try_get("phone_number").map_err(database_error)?,
            bio: row.try_get("bio").map_err(database_error)?,
            image,
            timestamps: Timestamps {
                created_at: row.try_get("created_at").map_err(database_error)?,
                updated_at: row.try_get("updated_at").map_err(database_error)?,
            },
        })
    }
}

fn database_error(e: sqlx::Error) -> ProfileError {
    ProfileError::DatabaseError(e.to_string())
}

/// A stored value that fails domain validation is a storage fault, not bad input.
fn invalid_column<E: std::fmt::Display>(
    column: &'static str,
) -> impl FnOnce(E) -> ProfileError {
    move |e| ProfileError::DatabaseError(format!("invalid {} in stored row: {}", column, e))
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Profile>, ProfileError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM profiles WHERE user_id = $1",
            PROFILE_COLUMNS
        ))
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_profile).transpose()
    }

    async fn find_public_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<PublicProfile>, ProfileError> {
        let row = sqlx::query(
            r#"
            SELECT p.id, p.user_id, p.full_name, p.phone_number, p.bio, p.image,
                   p.created_at, p.updated_at, u.username, u.email
            FROM profiles p
            INNER JOIN users u ON p.user_id = u.id
            WHERE u.username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let username: String = row.try_get("username").map_err(database_error)?;
        let email: String = row.try_get("email").map_err(database_error)?;

        Ok(Some(PublicProfile {
            profile: Self::row_to_profile(&row)?,
            username: Username::new(username)
                .map_err(|e| ProfileError::DatabaseError(e.to_string()))?,
            email: EmailAddress::new(email)
                .map_err(|e| ProfileError::DatabaseError(e.to_string()))?,
        }))
    }

    async fn update(&self, profile: Profile) -> Result<Profile, ProfileError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE profiles
            SET full_name = $2, phone_number = $3, bio = $4, image = $5
            WHERE user_id = $1
            RETURNING {}
            "#,
            PROFILE_COLUMNS
        ))
        .bind(profile.user_id.0)
        .bind(profile.full_name.as_deref())
        .bind(profile.phone_number.as_deref())
        .bind(profile.bio.as_deref())
        .bind(profile.image.as_ref().map(|image| image.as_str()))
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        match row {
            Some(row) => Self::row_to_profile(&row),
            None => Err(ProfileError::NotFound(profile.user_id.to_string())),
        }
    }
}
