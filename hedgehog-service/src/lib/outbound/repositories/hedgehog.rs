use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::common::Timestamps;
use crate::domain::hedgehog::errors::HedgehogError;
use crate::domain::hedgehog::models::Age;
use crate::domain::hedgehog::models::ColorType;
use crate::domain::hedgehog::models::Hedgehog;
use crate::domain::hedgehog::models::HedgehogId;
use crate::domain::hedgehog::models::HedgehogName;
use crate::domain::hedgehog::ports::HedgehogRepository;

const HEDGEHOG_COLUMNS: &str = "id, name, description, age, color_type, created_at, updated_at";

pub struct PostgresHedgehogRepository {
    pool: PgPool,
}

impl PostgresHedgehogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_hedgehog(row: &PgRow) -> Result<Hedgehog, HedgehogError> {
        Ok(Hedgehog {
            id: HedgehogId(row.try_get("id").map_err(database_error)?),
            name: HedgehogName::new(row.try_get("name").map_err(database_error)?)
                .map_err(invalid_column("name"))?,
            description: row.try_get("description").map_err(database_error)?,
            age: Age::new(row.try_get("age").map_err(database_error)?)
                .map_err(invalid_column("age"))?,
            color_type: ColorType::new(row.try_get("color_type").map_err(database_error)?)
                .map_err(invalid_column("color_type"))?,
            timestamps: Timestamps {
                created_at: row.try_get("created_at").map_err(database_error)?,
                updated_at: row.try_get("updated_at").map_err(database_error)?,
            },
        })
    }
}

fn database_error(e: sqlx::Error) -> HedgehogError {
    HedgehogError::DatabaseError(e.to_string())
}

/// A stored value that fails domain validation is a storage fault, not bad input.
fn invalid_column<E: std::fmt::Display>(
    column: &'static str,
) -> impl FnOnce(E) -> HedgehogError {
    move |e| HedgehogError::DatabaseError(format!("invalid {} in stored row: {}", column, e))
}

#[async_trait]
impl HedgehogRepository for PostgresHedgehogRepository {
    async fn create(&self, hedgehog: Hedgehog) -> Result<Hedgehog, HedgehogError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO hedgehogs (id, name, description, age, color_type)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            HEDGEHOG_COLUMNS
        ))
        .bind(hedgehog.id.0)
        .bind(hedgehog.name.as_str())
        .bind(hedgehog.description.as_deref())
        .bind(hedgehog.age.years())
        .bind(hedgehog.color_type.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Self::row_to_hedgehog(&row)
    }

    async fn find_by_id(&self, id: &HedgehogId) -> Result<Option<Hedgehog>, HedgehogError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM hedgehogs WHERE id = $1",
            HEDGEHOG_COLUMNS
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_hedgehog).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Hedgehog>, HedgehogError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM hedgehogs ORDER BY created_at",
            HEDGEHOG_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_hedgehog).collect()
    }

    async fn update(&self, hedgehog: Hedgehog) -> Result<Hedgehog, HedgehogError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE hedgehogs
            SET name = $2, description = $3, age = $4, color_type = $5
            WHERE id = $1
            RETURNING {}
            "#,
            HEDGEHOG_COLUMNS
        ))
        .bind(hedgehog.id.0)
        .bind(hedgehog.name.as_str())
        .bind(hedgehog.description.as_deref())
        .bind(hedgehog.age.years())
        .bind(hedgehog.color_type.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        match row {
            Some(row) => Self::row_to_hedgehog(&row),
            None => Err(HedgehogError::NotFound(hedgehog.id.to_string())),
        }
    }

    async fn delete(&self, id: &HedgehogId) -> Result<(), HedgehogError> {
        let result = sqlx::query("DELETE FROM hedgehogs WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(HedgehogError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
