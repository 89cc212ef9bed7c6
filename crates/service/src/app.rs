use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::difficulty::{DifficultyService, SeaOrmDifficultyRepository};
use crate::memory::InMemoryStore;
use crate::region::{RegionService, SeaOrmRegionRepository};
use crate::walk::{SeaOrmWalkRepository, WalkService};

/// Every service the HTTP layer needs, wired to one storage backend.
#[derive(Clone)]
pub struct AppServices {
    pub regions: Arc<RegionService>,
    pub walks: Arc<WalkService>,
    pub difficulties: Arc<DifficultyService>,
}

impl AppServices {
    pub fn seaorm(db: DatabaseConnection) -> Self {
        let regions = Arc::new(SeaOrmRegionRepository { db: db.clone() });
        let difficulties = Arc::new(SeaOrmDifficultyRepository { db: db.clone() });
        let walks = Arc::new(SeaOrmWalkRepository { db });
        Self {
            regions: Arc::new(RegionService::new(regions.clone())),
            walks: Arc::new(WalkService::new(walks, regions, difficulties.clone())),
            difficulties: Arc::new(DifficultyService::new(difficulties)),
        }
    }

    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            regions: Arc::new(RegionService::new(store.clone())),
            walks: Arc::new(WalkService::new(store.clone(), store.clone(), store.clone())),
            difficulties: Arc::new(DifficultyService::new(store)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListQuery;
    use crate::region::RegionInput;

    #[tokio::test]
    async fn in_memory_services_share_one_store() -> Result<(), anyhow::Error> {
        let services = AppServices::in_memory(Arc::new(InMemoryStore::seeded()));
        let before = services.regions.list(&ListQuery::default()).await?.len();
        services
            .regions
            .create(RegionInput { code: "CAN".into(), name: "Canterbury".into(), region_image_url: None })
            .await?;
        assert_eq!(services.regions.list(&ListQuery::default()).await?.len(), before + 1);
        assert_eq!(services.difficulties.list().await?.len(), 3);
        Ok(())
    }
}
