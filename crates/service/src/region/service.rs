use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{Region, RegionInput};
use super::repository::RegionRepository;
use crate::errors::ServiceError;
use crate::listing::{self, ListQuery};

/// Application service for regions, independent of the web framework.
pub struct RegionService {
    repo: Arc<dyn RegionRepository>,
}

impl RegionService {
    pub fn new(repo: Arc<dyn RegionRepository>) -> Self { Self { repo } }

    /// Load every region and return the page described by `query`.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Region>, ServiceError> {
        let all = self.repo.list().await?;
        Ok(listing::apply(all, query))
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Region>, ServiceError> { self.repo.get(id).await }

    #[instrument(skip(self, input), fields(code = %input.code))]
    pub async fn create(&self, input: RegionInput) -> Result<Region, ServiceError> {
        input.validate()?;
        let created = self.repo.create(input).await?;
        info!(region_id = %created.id, "region_created");
        Ok(created)
    }

    #[instrument(skip(self, input), fields(region_id = %id))]
    pub async fn update(&self, id: Uuid, input: RegionInput) -> Result<Region, ServiceError> {
        input.validate()?;
        let updated = self.repo.update(id, input).await?;
        info!("region_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(region_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<Region, ServiceError> {
        let deleted = self.repo.delete(id).await?;
        info!(code = %deleted.code, "region_deleted");
        Ok(deleted)
    }
}
