use async_trait::async_trait;

use crate::domain::hedgehog::errors::HedgehogError;
use crate::domain::hedgehog::models::CreateHedgehogCommand;
use crate::domain::hedgehog::models::Hedgehog;
use crate::domain::hedgehog::models::HedgehogId;
use crate::domain::hedgehog::models::UpdateHedgehogCommand;

/// Port for hedgehog domain service operations.
#[async_trait]
pub trait HedgehogServicePort: Send + Sync + 'static {
    async fn create_hedgehog(
        &self,
        command: CreateHedgehogCommand,
    ) -> Result<Hedgehog, HedgehogError>;

    /// # Errors
    /// * `NotFound` - Hedgehog does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_hedgehog(&self, id: &HedgehogId) -> Result<Hedgehog, HedgehogError>;

    async fn list_hedgehogs(&self) -> Result<Vec<Hedgehog>, HedgehogError>;

    /// Apply a partial update.
    ///
    /// # Errors
    /// * `NotFound` - Hedgehog does not exist
    /// * `MissingColorType` - Color type explicitly set to null
    /// * `DatabaseError` - Database operation failed
    async fn update_hedgehog(
        &self,
        id: &HedgehogId,
        command: UpdateHedgehogCommand,
    ) -> Result<Hedgehog, HedgehogError>;

    /// Delete a hedgehog and return its identifier.
    ///
    /// # Errors
    /// * `NotFound` - Hedgehog does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_hedgehog(&self, id: &HedgehogId) -> Result<HedgehogId, HedgehogError>;
}

/// Persistence operations for hedgehogs.
#[async_trait]
pub trait HedgehogRepository: Send + Sync + 'static {
    async fn create(&self, hedgehog: Hedgehog) -> Result<Hedgehog, HedgehogError>;

    async fn find_by_id(&self, id: &HedgehogId) -> Result<Option<Hedgehog>, HedgehogError>;

    async fn list_all(&self) -> Result<Vec<Hedgehog>, HedgehogError>;

    /// # Errors
    /// * `NotFound` - Hedgehog does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, hedgehog: Hedgehog) -> Result<Hedgehog, HedgehogError>;

    /// # Errors
    /// * `NotFound` - Hedgehog does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &HedgehogId) -> Result<(), HedgehogError>;
}
