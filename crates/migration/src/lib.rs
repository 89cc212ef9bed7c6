//! Migrator registering the schema in dependency order.
//! Seed data is applied after all tables exist.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_region;
mod m20240601_000002_create_difficulty;
mod m20240601_000003_create_walk;
mod m20240601_000004_seed_lookup_data;
pub mod seed;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_region::Migration),
            Box::new(m20240601_000002_create_difficulty::Migration),
            Box::new(m20240601_000003_create_walk::Migration),
            Box::new(m20240601_000004_seed_lookup_data::Migration),
        ]
    }
}
