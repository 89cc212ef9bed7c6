use crate::db::{connect_with_config, migrate};
use crate::{difficulty, region, walk};
use anyhow::Result;
use configs::DatabaseConfig;
use migration::seed;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tokio::sync::OnceCell;
use uuid::Uuid;

static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Migrated connection, or `None` when no database is configured for tests.
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var_os("SKIP_DB_TESTS").is_some() {
        return Ok(None);
    }
    let cfg = DatabaseConfig { min_connections: 1, ..DatabaseConfig::from_env() };
    if cfg.url.trim().is_empty() {
        return Ok(None);
    }
    let db = connect_with_config(&cfg).await?;
    MIGRATED.get_or_try_init(|| migrate(&db)).await?;
    Ok(Some(db))
}

async fn insert_region(db: &DatabaseConnection, code: &str) -> Result<region::Model> {
    let am = region::ActiveModel {
        id: Set(Uuid::new_v4()),
        code: Set(code.to_string()),
        name: Set(format!("entity test {}", Uuid::new_v4())),
        region_image_url: Set(None),
    };
    Ok(am.insert(db).await?)
}

fn walk_row(region_id: Uuid, difficulty_id: Uuid) -> walk::ActiveModel {
    walk::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Entity test walk".to_string()),
        description: Set("Inserted by the entity tests".to_string()),
        length_in_km: Set(4.5),
        walk_image_url: Set(None),
        region_id: Set(region_id),
        difficulty_id: Set(difficulty_id),
    }
}

#[tokio::test]
async fn seeded_difficulties_exist() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    for seeded in seed::DIFFICULTIES {
        let found = difficulty::Entity::find_by_id(seed::parse_id(seeded.id)).one(&db).await?;
        assert_eq!(found.map(|d| d.name).as_deref(), Some(seeded.name));
    }
    Ok(())
}

#[tokio::test]
async fn walk_requires_existing_region() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let easy = seed::parse_id(seed::DIFFICULTIES[0].id);
    let res = walk_row(Uuid::new_v4(), easy).insert(&db).await;
    assert!(res.is_err(), "walk with a dangling region id was stored");
    Ok(())
}

#[tokio::test]
async fn region_delete_cascades_to_walks() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let region = insert_region(&db, "CSC").await?;
    let medium = seed::parse_id(seed::DIFFICULTIES[1].id);
    let stored = walk_row(region.id, medium).insert(&db).await?;

    region::Entity::delete_by_id(region.id).exec(&db).await?;

    assert!(walk::Entity::find_by_id(stored.id).one(&db).await?.is_none());
    Ok(())
}
