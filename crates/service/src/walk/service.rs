use std::sync::Arc;

use models::errors::{FieldErrors, ModelError};
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{Walk, WalkInput};
use super::repository::WalkRepository;
use crate::difficulty::DifficultyRepository;
use crate::errors::ServiceError;
use crate::listing::{self, ListQuery};
use crate::region::RegionRepository;

/// Application service for walks. Checks that referenced regions and
/// difficulties exist before anything is written.
pub struct WalkService {
    walks: Arc<dyn WalkRepository>,
    regions: Arc<dyn RegionRepository>,
    difficulties: Arc<dyn DifficultyRepository>,
}

impl WalkService {
    pub fn new(
        walks: Arc<dyn WalkRepository>,
        regions: Arc<dyn RegionRepository>,
        difficulties: Arc<dyn DifficultyRepository>,
    ) -> Self {
        Self { walks, regions, difficulties }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Walk>, ServiceError> {
        let all = self.walks.list().await?;
        Ok(listing::apply(all, query))
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Walk>, ServiceError> { self.walks.get(id).await }

    #[instrument(skip(self, input), fields(region_id = %input.region_id, difficulty_id = %input.difficulty_id))]
    pub async fn create(&self, input: WalkInput) -> Result<Walk, ServiceError> {
        self.check(&input).await?;
        let created = self.walks.create(input).await?;
        info!(walk_id = %created.id, "walk_created");
        Ok(created)
    }

    #[instrument(skip(self, input), fields(walk_id = %id))]
    pub async fn update(&self, id: Uuid, input: WalkInput) -> Result<Walk, ServiceError> {
        self.check(&input).await?;
        let updated = self.walks.update(id, input).await?;
        info!("walk_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(walk_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<Walk, ServiceError> {
        let deleted = self.walks.delete(id).await?;
        info!(name = %deleted.name, "walk_deleted");
        Ok(deleted)
    }

    /// Column rules plus reference existence, reported together.
    async fn check(&self, input: &WalkInput) -> Result<(), ServiceError> {
        let mut errors = match input.validate() {
            Ok(()) => FieldErrors::new(),
            Err(ModelError::Validation(errors)) => errors,
        };
        if self.regions.get(input.region_id).await?.is_none() {
            errors.add("regionId", format!("region {} does not exist", input.region_id));
        }
        if self.difficulties.get(input.difficulty_id).await?.is_none() {
            errors.add("difficultyId", format!("difficulty {} does not exist", input.difficulty_id));
        }
        errors.into_result().map_err(ServiceError::Validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;
    use crate::region::RegionService;
    use migration::seed;

    fn services() -> (WalkService, RegionService) {
        let store = Arc::new(InMemoryStore::seeded());
        (
            WalkService::new(store.clone(), store.clone(), store.clone()),
            RegionService::new(store),
        )
    }

    fn input(name: &str, km: f64) -> WalkInput {
        WalkInput {
            name: name.into(),
            description: format!("{name} description"),
            length_in_km: km,
            walk_image_url: None,
            region_id: seed::parse_id(seed::REGIONS[0].id),
            difficulty_id: seed::parse_id(seed::DIFFICULTIES[1].id),
        }
    }

    #[tokio::test]
    async fn create_attaches_region_and_difficulty() -> Result<(), anyhow::Error> {
        let (walks, _) = services();
        let created = walks.create(input("Rangitoto Summit", 7.0)).await?;
        assert_eq!(created.region.code, "AKL");
        assert_eq!(created.difficulty.name, "Medium");
        assert_eq!(walks.get(created.id).await?, Some(created));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_references_are_validation_errors() {
        let (walks, _) = services();
        let bad = WalkInput { region_id: Uuid::new_v4(), difficulty_id: Uuid::new_v4(), ..input("Nowhere", 1.0) };
        let err = walks.create(bad).await.unwrap_err();
        let fields = err.field_errors().expect("validation error");
        assert!(fields.contains("regionId"));
        assert!(fields.contains("difficultyId"));
    }

    #[tokio::test]
    async fn column_and_reference_errors_are_reported_together() {
        let (walks, _) = services();
        let bad = WalkInput { region_id: Uuid::new_v4(), ..input("", 99.0) };
        let err = walks.create(bad).await.unwrap_err();
        let fields = err.field_errors().expect("validation error");
        assert!(fields.contains("name"));
        assert!(fields.contains("lengthInKm"));
        assert!(fields.contains("regionId"));
        assert!(!fields.contains("difficultyId"));
    }

    #[tokio::test]
    async fn update_replaces_every_field() -> Result<(), anyhow::Error> {
        let (walks, _) = services();
        let created = walks
            .create(WalkInput { walk_image_url: Some("https://img.example.com/w.jpg".into()), ..input("Old", 4.0) })
            .await?;
        let replacement = WalkInput {
            region_id: seed::parse_id(seed::REGIONS[3].id),
            difficulty_id: seed::parse_id(seed::DIFFICULTIES[2].id),
            ..input("New", 9.5)
        };
        let updated = walks.update(created.id, replacement).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "New");
        assert_eq!(updated.description, "New description");
        assert_eq!(updated.length_in_km, 9.5);
        assert_eq!(updated.walk_image_url, None);
        assert_eq!(updated.region.code, "WGN");
        assert_eq!(updated.difficulty.name, "Hard");
        Ok(())
    }

    #[tokio::test]
    async fn missing_walk_is_not_found() {
        let (walks, _) = services();
        let id = Uuid::new_v4();
        assert!(walks.update(id, input("Ghost", 1.0)).await.unwrap_err().is_not_found());
        assert!(walks.delete(id).await.unwrap_err().is_not_found());
        assert!(walks.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_a_region_removes_its_walks() -> Result<(), anyhow::Error> {
        let (walks, regions) = services();
        let created = walks.create(input("Doomed", 2.0)).await?;
        regions.delete(created.region.id).await?;
        assert!(walks.get(created.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn list_filters_sorts_and_pages() -> Result<(), anyhow::Error> {
        let (walks, _) = services();
        for (name, km) in [("Abel Tasman", 50.0), ("Hooker Valley", 10.0), ("Routeburn", 32.0), ("Milford Track", 49.0)] {
            walks.create(input(name, km)).await?;
        }
        let longest = walks.list(&ListQuery::default().sort("lengthInKm", false).page(1, 2)).await?;
        let names: Vec<_> = longest.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Abel Tasman", "Milford Track"]);

        let tracks = walks.list(&ListQuery::default().filter("name", "track")).await?;
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].name, "Milford Track");
        Ok(())
    }
}
