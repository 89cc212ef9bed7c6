//! Process-local storage backend.
//!
//! Rows are kept in insertion order behind a single mutex and follow the
//! same constraints as the SQL schema: walk references are checked on write
//! and deleting a region removes its walks.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use migration::seed;
use uuid::Uuid;

use models::{difficulty, region, walk};

use crate::difficulty::{Difficulty, DifficultyRepository};
use crate::errors::ServiceError;
use crate::region::{Region, RegionInput, RegionRepository};
use crate::walk::{Walk, WalkInput, WalkRepository};

#[derive(Default)]
struct Tables {
    regions: Vec<region::Model>,
    difficulties: Vec<difficulty::Model>,
    walks: Vec<walk::Model>,
}

impl Tables {
    fn region(&self, id: Uuid) -> Option<&region::Model> { self.regions.iter().find(|r| r.id == id) }

    fn difficulty(&self, id: Uuid) -> Option<&difficulty::Model> { self.difficulties.iter().find(|d| d.id == id) }

    fn check_references(&self, input: &WalkInput) -> Result<(), ServiceError> {
        if self.region(input.region_id).is_none() {
            return Err(ServiceError::Db(format!("walk.region_id {} violates foreign key fk_walk_region", input.region_id)));
        }
        if self.difficulty(input.difficulty_id).is_none() {
            return Err(ServiceError::Db(format!(
                "walk.difficulty_id {} violates foreign key fk_walk_difficulty",
                input.difficulty_id
            )));
        }
        Ok(())
    }

    fn attach(&self, m: &walk::Model) -> Result<Walk, ServiceError> {
        let region = self
            .region(m.region_id)
            .ok_or_else(|| ServiceError::Db(format!("walk {} references missing region", m.id)))?;
        let difficulty = self
            .difficulty(m.difficulty_id)
            .ok_or_else(|| ServiceError::Db(format!("walk {} references missing difficulty", m.id)))?;
        Ok(Walk::from_parts(m.clone(), region.clone().into(), difficulty.clone().into()))
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Empty store without any lookup rows.
    pub fn new() -> Self { Self::default() }

    /// Store holding the same difficulties and regions the migrations seed.
    pub fn seeded() -> Self {
        let tables = Tables {
            difficulties: seed::DIFFICULTIES
                .iter()
                .map(|d| difficulty::Model { id: seed::parse_id(d.id), name: d.name.to_string() })
                .collect(),
            regions: seed::REGIONS
                .iter()
                .map(|r| region::Model {
                    id: seed::parse_id(r.id),
                    code: r.code.to_string(),
                    name: r.name.to_string(),
                    region_image_url: r.image_url.map(str::to_string),
                })
                .collect(),
            walks: Vec::new(),
        };
        Self { tables: Mutex::new(tables) }
    }

    /// Add a lookup row; difficulties have no public write path.
    pub fn insert_difficulty(&self, name: &str) -> Result<Difficulty, ServiceError> {
        let mut t = self.lock()?;
        let row = difficulty::Model { id: Uuid::new_v4(), name: name.to_string() };
        t.difficulties.push(row.clone());
        Ok(row.into())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, ServiceError> {
        self.tables.lock().map_err(|_| ServiceError::Db("in-memory store lock poisoned".into()))
    }
}

#[async_trait]
impl RegionRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Region>, ServiceError> {
        let t = self.lock()?;
        Ok(t.regions.iter().cloned().map(Region::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Region>, ServiceError> {
        let t = self.lock()?;
        Ok(t.region(id).cloned().map(Region::from))
    }

    async fn create(&self, input: RegionInput) -> Result<Region, ServiceError> {
        let mut t = self.lock()?;
        let row = region::Model {
            id: Uuid::new_v4(),
            code: input.code,
            name: input.name,
            region_image_url: input.region_image_url,
        };
        t.regions.push(row.clone());
        Ok(row.into())
    }

    async fn update(&self, id: Uuid, input: RegionInput) -> Result<Region, ServiceError> {
        let mut t = self.lock()?;
        let row = t.regions.iter_mut().find(|r| r.id == id).ok_or_else(|| ServiceError::not_found("region"))?;
        row.code = input.code;
        row.name = input.name;
        row.region_image_url = input.region_image_url;
        Ok(row.clone().into())
    }

    async fn delete(&self, id: Uuid) -> Result<Region, ServiceError> {
        let mut t = self.lock()?;
        let pos = t.regions.iter().position(|r| r.id == id).ok_or_else(|| ServiceError::not_found("region"))?;
        let removed = t.regions.remove(pos);
        t.walks.retain(|w| w.region_id != id);
        Ok(removed.into())
    }
}

#[async_trait]
impl DifficultyRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Difficulty>, ServiceError> {
        let t = self.lock()?;
        Ok(t.difficulties.iter().cloned().map(Difficulty::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Difficulty>, ServiceError> {
        let t = self.lock()?;
        Ok(t.difficulty(id).cloned().map(Difficulty::from))
    }
}

#[async_trait]
impl WalkRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Walk>, ServiceError> {
        let t = self.lock()?;
        t.walks.iter().map(|w| t.attach(w)).collect()
    }

    async fn get(&self, id: Uuid) -> Result<Option<Walk>, ServiceError> {
        let t = self.lock()?;
        t.walks.iter().find(|w| w.id == id).map(|w| t.attach(w)).transpose()
    }

    async fn create(&self, input: WalkInput) -> Result<Walk, ServiceError> {
        let mut t = self.lock()?;
        t.check_references(&input)?;
        let row = walk::Model {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            length_in_km: input.length_in_km,
            walk_image_url: input.walk_image_url,
            region_id: input.region_id,
            difficulty_id: input.difficulty_id,
        };
        t.walks.push(row.clone());
        t.attach(&row)
    }

    async fn update(&self, id: Uuid, input: WalkInput) -> Result<Walk, ServiceError> {
        let mut t = self.lock()?;
        let pos = t.walks.iter().position(|w| w.id == id).ok_or_else(|| ServiceError::not_found("walk"))?;
        t.check_references(&input)?;
        let row = &mut t.walks[pos];
        row.name = input.name;
        row.description = input.description;
        row.length_in_km = input.length_in_km;
        row.walk_image_url = input.walk_image_url;
        row.region_id = input.region_id;
        row.difficulty_id = input.difficulty_id;
        let row = row.clone();
        t.attach(&row)
    }

    async fn delete(&self, id: Uuid) -> Result<Walk, ServiceError> {
        let mut t = self.lock()?;
        let pos = t.walks.iter().position(|w| w.id == id).ok_or_else(|| ServiceError::not_found("walk"))?;
        let prior = t.attach(&t.walks[pos])?;
        t.walks.remove(pos);
        Ok(prior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_input(region_id: Uuid, difficulty_id: Uuid) -> WalkInput {
        WalkInput {
            name: "Test walk".into(),
            description: "Test".into(),
            length_in_km: 1.0,
            walk_image_url: None,
            region_id,
            difficulty_id,
        }
    }

    #[tokio::test]
    async fn walk_insert_enforces_foreign_keys() -> Result<(), anyhow::Error> {
        let store = InMemoryStore::new();
        let medium = store.insert_difficulty("Medium")?;
        let err = WalkRepository::create(&store, walk_input(Uuid::new_v4(), medium.id)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        Ok(())
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() -> Result<(), anyhow::Error> {
        let store = InMemoryStore::new();
        for name in ["Zed", "Alpha", "Mid"] {
            RegionRepository::create(&store, RegionInput { code: "ABC".into(), name: name.into(), region_image_url: None }).await?;
        }
        let names: Vec<_> = RegionRepository::list(&store).await?.into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Zed", "Alpha", "Mid"]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_returns_prior_state() -> Result<(), anyhow::Error> {
        let store = InMemoryStore::seeded();
        let region = seed::parse_id(seed::REGIONS[1].id);
        let easy = seed::parse_id(seed::DIFFICULTIES[0].id);
        let created = WalkRepository::create(&store, walk_input(region, easy)).await?;
        let deleted = WalkRepository::delete(&store, created.id).await?;
        assert_eq!(deleted, created);
        assert!(WalkRepository::get(&store, created.id).await?.is_none());
        Ok(())
    }
}
