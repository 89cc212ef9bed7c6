//! Difficulty lookup: read-only, seeded by the migrations.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

use models::difficulty;

use crate::errors::{db_err, ServiceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difficulty {
    pub id: Uuid,
    pub name: String,
}

impl From<difficulty::Model> for Difficulty {
    fn from(m: difficulty::Model) -> Self { Self { id: m.id, name: m.name } }
}

#[async_trait]
pub trait DifficultyRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Difficulty>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<Difficulty>, ServiceError>;
}

pub struct SeaOrmDifficultyRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl DifficultyRepository for SeaOrmDifficultyRepository {
    async fn list(&self) -> Result<Vec<Difficulty>, ServiceError> {
        let rows = difficulty::Entity::find()
            .order_by_asc(difficulty::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Difficulty::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Difficulty>, ServiceError> {
        let found = difficulty::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        Ok(found.map(Difficulty::from))
    }
}

pub struct DifficultyService {
    repo: Arc<dyn DifficultyRepository>,
}

impl DifficultyService {
    pub fn new(repo: Arc<dyn DifficultyRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Difficulty>, ServiceError> { self.repo.list().await }

    pub async fn get(&self, id: Uuid) -> Result<Option<Difficulty>, ServiceError> { self.repo.get(id).await }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;
    use migration::seed;

    #[tokio::test]
    async fn seeded_store_exposes_lookup_rows() -> Result<(), anyhow::Error> {
        let svc = DifficultyService::new(Arc::new(InMemoryStore::seeded()));
        let all = svc.list().await?;
        assert_eq!(all.len(), seed::DIFFICULTIES.len());
        let easy = svc.get(seed::parse_id(seed::DIFFICULTIES[0].id)).await?.expect("easy is seeded");
        assert_eq!(easy.name, "Easy");
        assert!(svc.get(Uuid::new_v4()).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_lists_seeded_difficulties() -> Result<(), anyhow::Error> {
        let Some(db) = crate::test_support::get_db().await? else { return Ok(()); };
        let repo = SeaOrmDifficultyRepository { db };
        let names: Vec<_> = repo.list().await?.into_iter().map(|d| d.name).collect();
        for d in seed::DIFFICULTIES {
            assert!(names.iter().any(|n| n == d.name), "missing {}", d.name);
        }
        Ok(())
    }
}
