use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use models::{difficulty, region, walk};

use super::domain::{Walk, WalkInput};
use crate::difficulty::Difficulty;
use crate::errors::{db_err, ServiceError};
use crate::region::Region;

/// Repository abstraction for walk persistence. Reads return the walk with
/// its region and difficulty attached.
#[async_trait]
pub trait WalkRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Walk>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<Walk>, ServiceError>;
    async fn create(&self, input: WalkInput) -> Result<Walk, ServiceError>;
    /// Overwrite every writable field; `NotFound` if `id` does not exist.
    async fn update(&self, id: Uuid, input: WalkInput) -> Result<Walk, ServiceError>;
    /// Remove the row and return what it held; `NotFound` if `id` does not exist.
    async fn delete(&self, id: Uuid) -> Result<Walk, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmWalkRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmWalkRepository {
    async fn find(&self, id: Uuid) -> Result<Option<walk::Model>, ServiceError> {
        walk::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    /// Attach region and difficulty; both are guaranteed by the foreign keys.
    async fn attach(&self, m: walk::Model) -> Result<Walk, ServiceError> {
        let region = region::Entity::find_by_id(m.region_id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| ServiceError::Db(format!("walk {} references missing region {}", m.id, m.region_id)))?;
        let difficulty = difficulty::Entity::find_by_id(m.difficulty_id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| ServiceError::Db(format!("walk {} references missing difficulty {}", m.id, m.difficulty_id)))?;
        Ok(Walk::from_parts(m, region.into(), difficulty.into()))
    }
}

#[async_trait]
impl WalkRepository for SeaOrmWalkRepository {
    async fn list(&self) -> Result<Vec<Walk>, ServiceError> {
        let rows = walk::Entity::find()
            .order_by_asc(walk::Column::Name)
            .order_by_asc(walk::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let regions: HashMap<Uuid, Region> = region::Entity::find()
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|r| (r.id, Region::from(r)))
            .collect();
        let difficulties: HashMap<Uuid, Difficulty> = difficulty::Entity::find()
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|d| (d.id, Difficulty::from(d)))
            .collect();

        let mut walks = Vec::with_capacity(rows.len());
        for m in rows {
            // a walk inserted between the queries above can miss its parents; skip it
            let (Some(region), Some(difficulty)) = (regions.get(&m.region_id), difficulties.get(&m.difficulty_id)) else {
                continue;
            };
            walks.push(Walk::from_parts(m, region.clone(), difficulty.clone()));
        }
        Ok(walks)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Walk>, ServiceError> {
        match self.find(id).await? {
            Some(m) => Ok(Some(self.attach(m).await?)),
            None => Ok(None),
        }
    }

    async fn create(&self, input: WalkInput) -> Result<Walk, ServiceError> {
        let am = walk::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            description: Set(input.description),
            length_in_km: Set(input.length_in_km),
            walk_image_url: Set(input.walk_image_url),
            region_id: Set(input.region_id),
            difficulty_id: Set(input.difficulty_id),
        };
        let created = am.insert(&self.db).await.map_err(db_err)?;
        self.attach(created).await
    }

    async fn update(&self, id: Uuid, input: WalkInput) -> Result<Walk, ServiceError> {
        let Some(existing) = self.find(id).await? else { return Err(ServiceError::not_found("walk")); };
        let mut am: walk::ActiveModel = existing.into();
        am.name = Set(input.name);
        am.description = Set(input.description);
        am.length_in_km = Set(input.length_in_km);
        am.walk_image_url = Set(input.walk_image_url);
        am.region_id = Set(input.region_id);
        am.difficulty_id = Set(input.difficulty_id);
        let updated = am.update(&self.db).await.map_err(db_err)?;
        self.attach(updated).await
    }

    async fn delete(&self, id: Uuid) -> Result<Walk, ServiceError> {
        let Some(existing) = self.find(id).await? else { return Err(ServiceError::not_found("walk")); };
        let prior = self.attach(existing).await?;
        let res = walk::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("walk"));
        }
        Ok(prior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{RegionInput, RegionRepository, SeaOrmRegionRepository};
    use crate::test_support::get_db;
    use migration::seed;

    #[tokio::test]
    async fn walk_crud_seaorm() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()); };
        let regions = SeaOrmRegionRepository { db: db.clone() };
        let walks = SeaOrmWalkRepository { db };

        let region = regions
            .create(RegionInput { code: "WLK".into(), name: format!("Walk test {}", Uuid::new_v4()), region_image_url: None })
            .await?;
        let easy = seed::parse_id(seed::DIFFICULTIES[0].id);
        let hard = seed::parse_id(seed::DIFFICULTIES[2].id);

        let input = WalkInput {
            name: "Coast track".into(),
            description: "Along the cliffs".into(),
            length_in_km: 12.5,
            walk_image_url: None,
            region_id: region.id,
            difficulty_id: easy,
        };
        let created = walks.create(input.clone()).await?;
        assert_eq!(created.region, region);
        assert_eq!(created.difficulty.name, "Easy");
        assert_eq!(walks.get(created.id).await?, Some(created.clone()));

        let updated = walks.update(created.id, WalkInput { difficulty_id: hard, length_in_km: 3.0, ..input }).await?;
        assert_eq!(updated.difficulty.name, "Hard");
        assert_eq!(updated.length_in_km, 3.0);

        // deleting the region cascades to its walks
        regions.delete(region.id).await?;
        assert!(walks.get(created.id).await?.is_none());
        assert!(walks.delete(created.id).await.unwrap_err().is_not_found());
        Ok(())
    }
}
