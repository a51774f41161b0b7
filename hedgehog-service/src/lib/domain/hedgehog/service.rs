use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::hedgehog::errors::HedgehogError;
use crate::domain::hedgehog::models::CreateHedgehogCommand;
use crate::domain::hedgehog::models::Hedgehog;
use crate::domain::hedgehog::models::HedgehogId;
use crate::domain::hedgehog::models::UpdateHedgehogCommand;
use crate::domain::hedgehog::ports::HedgehogRepository;
use crate::domain::hedgehog::ports::HedgehogServicePort;

/// Domain service implementation for hedgehog operations.
pub struct HedgehogService<HR>
where
    HR: HedgehogRepository,
{
    repository: Arc<HR>,
}

impl<HR> HedgehogService<HR>
where
    HR: HedgehogRepository,
{
    pub fn new(repository: Arc<HR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<HR> HedgehogServicePort for HedgehogService<HR>
where
    HR: HedgehogRepository,
{
    async fn create_hedgehog(
        &self,
        command: CreateHedgehogCommand,
    ) -> Result<Hedgehog, HedgehogError> {
        let hedgehog = self.repository.create(Hedgehog::new(command)).await?;
        tracing::info!(hedgehog_id = %hedgehog.id, "Hedgehog created");
        Ok(hedgehog)
    }

    async fn get_hedgehog(&self, id: &HedgehogId) -> Result<Hedgehog, HedgehogError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(HedgehogError::NotFound(id.to_string()))
    }

    async fn list_hedgehogs(&self) -> Result<Vec<Hedgehog>, HedgehogError> {
        self.repository.list_all().await
    }

    async fn update_hedgehog(
        &self,
        id: &HedgehogId,
        command: UpdateHedgehogCommand,
    ) -> Result<Hedgehog, HedgehogError> {
        let mut hedgehog = self.get_hedgehog(id).await?;
        hedgehog.apply(command)?;
        self.repository.update(hedgehog).await
    }

    async fn delete_hedgehog(&self, id: &HedgehogId) -> Result<HedgehogId, HedgehogError> {
        self.repository.delete(id).await?;
        tracing::info!(hedgehog_id = %id, "Hedgehog deleted");
        Ok(*id)
    }
}
