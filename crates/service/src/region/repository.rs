use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use models::region;

use super::domain::{Region, RegionInput};
use crate::errors::{db_err, ServiceError};

/// Repository abstraction for region persistence.
#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Region>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<Region>, ServiceError>;
    async fn create(&self, input: RegionInput) -> Result<Region, ServiceError>;
    /// Overwrite every writable field; `NotFound` if `id` does not exist.
    async fn update(&self, id: Uuid, input: RegionInput) -> Result<Region, ServiceError>;
    /// Remove the row and return what it held; `NotFound` if `id` does not exist.
    async fn delete(&self, id: Uuid) -> Result<Region, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmRegionRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRegionRepository {
    async fn find(&self, id: Uuid) -> Result<Option<region::Model>, ServiceError> {
        region::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }
}

#[async_trait]
impl RegionRepository for SeaOrmRegionRepository {
    async fn list(&self) -> Result<Vec<Region>, ServiceError> {
        let rows = region::Entity::find()
            .order_by_asc(region::Column::Name)
            .order_by_asc(region::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Region::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Region>, ServiceError> {
        Ok(self.find(id).await?.map(Region::from))
    }

    async fn create(&self, input: RegionInput) -> Result<Region, ServiceError> {
        let am = region::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(input.code),
            name: Set(input.name),
            region_image_url: Set(input.region_image_url),
        };
        let created = am.insert(&self.db).await.map_err(db_err)?;
        Ok(created.into())
    }

    async fn update(&self, id: Uuid, input: RegionInput) -> Result<Region, ServiceError> {
        let Some(existing) = self.find(id).await? else { return Err(ServiceError::not_found("region")); };
        let mut am: region::ActiveModel = existing.into();
        am.code = Set(input.code);
        am.name = Set(input.name);
        am.region_image_url = Set(input.region_image_url);
        let updated = am.update(&self.db).await.map_err(db_err)?;
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> Result<Region, ServiceError> {
        let Some(existing) = self.find(id).await? else { return Err(ServiceError::not_found("region")); };
        let res = region::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("region"));
        }
        Ok(existing.into())
    }
}
