use async_trait::async_trait;
use auth::Credentials;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::common::Timestamps;
use crate::domain::profile::models::ProfileId;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserAccount;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::outbound::repositories::profile::PostgresProfileRepository;
use crate::outbound::repositories::profile::PROFILE_COLUMNS;
use crate::user::errors::UserError;

const USER_COLUMNS: &str = "id, email, username, password, salt, email_verified, is_active, \
                            is_superuser, created_at, updated_at";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &PgRow) -> Result<User, UserError> {
        Ok(User {
            id: UserId(row.try_get("id").map_err(database_error)?),
            email: EmailAddress::new(row.try_get("email").map_err(database_error)?)
                .map_err(invalid_column("email"))?,
            username: Username::new(row.try_get("username").map_err(database_error)?)
                .map_err(invalid_column("username"))?,
            credentials: Credentials::new(
                row.try_get("salt").map_err(database_error)?,
                row.try_get("password").map_err(database_error)?,
            ),
            email_verified: row.try_get("email_verified").map_err(database_error)?,
            is_active: row.try_get("is_active").map_err(database_error)?,
            is_superuser: row.try_get("is_superuser").map_err(database_error)?,
            timestamps: Timestamps {
                created_at: row.try_get("created_at").map_err(database_error)?,
                updated_at: row.try_get("updated_at").map_err(database_error)?,
            },
        })
    }

    async fn find_one_by(&self, column: &str, value: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE {} = $1",
            USER_COLUMNS, column
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

fn database_error(e: sqlx::Error) -> UserError {
    UserError::DatabaseError(e.to_string())
}

/// A stored value that fails domain validation is a storage fault, not bad input.
fn invalid_column<E: std::fmt::Display>(
    column: &'static str,
) -> impl FnOnce(E) -> UserError {
    move |e| UserError::DatabaseError(format!("invalid {} in stored row: {}", column, e))
}

/// Map unique violations on the user columns to conflicts.
fn insert_error(e: sqlx::Error) -> UserError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if db_err.constraint() == Some("users_username_key") {
                return UserError::UsernameAlreadyExists;
            }
            if db_err.constraint() == Some("users_email_key") {
                return UserError::EmailAlreadyExists;
            }
        }
    }
    database_error(e)
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create_with_profile(&self, user: NewUser) -> Result<UserAccount, UserError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let user_row = sqlx::query(&format!(
            r#"
            INSERT INTO users (id, email, username, password, salt)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(user.id.0)
        .bind(user.email.as_str())
        .bind(user.username.as_str())
        .bind(&user.credentials.hash)
        .bind(&user.credentials.salt)
        .fetch_one(&mut *tx)
        .await
        .map_err(insert_error)?;

        let profile_row = sqlx::query(&format!(
            r#"
            INSERT INTO profiles (id, user_id)
            VALUES ($1, $2)
            RETURNING {}
            "#,
            PROFILE_COLUMNS
        ))
        .bind(ProfileId::new().0)
        .bind(user.id.0)
        .fetch_one(&mut *tx)
        .await
        .map_err(database_error)?;

        tx.commit().await.map_err(insert_error)?;

        let profile = PostgresProfileRepository::row_to_profile(&profile_row)
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(UserAccount {
            user: Self::row_to_user(&user_row)?,
            profile,
        })
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        self.find_one_by("username", username.as_str()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        self.find_one_by("email", email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_stored_values_are_database_errors() {
        let email =
            EmailAddress::new("not-an-email".to_string()).map_err(invalid_column("email"));
        assert!(matches!(email, Err(UserError::DatabaseError(_))));

        let username =
            Username::new("no spaces".to_string()).map_err(invalid_column("username"));
        assert!(matches!(username, Err(UserError::DatabaseError(_))));
    }
}
