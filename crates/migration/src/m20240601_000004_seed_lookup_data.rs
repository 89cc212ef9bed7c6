//! Seed difficulties and the starter regions.
use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_region::Region;
use crate::m20240601_000002_create_difficulty::Difficulty;
use crate::seed::{parse_id, DIFFICULTIES, REGIONS};

fn seed_err(e: impl std::fmt::Display) -> DbErr { DbErr::Custom(format!("seed rows: {e}")) }

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut difficulties = Query::insert();
        difficulties
            .into_table(Difficulty::Table)
            .columns([Difficulty::Id, Difficulty::Name])
            .on_conflict(OnConflict::column(Difficulty::Id).do_nothing().to_owned());
        for d in DIFFICULTIES {
            difficulties.values([parse_id(d.id).into(), d.name.into()]).map_err(seed_err)?;
        }
        manager.exec_stmt(difficulties).await?;

        let mut regions = Query::insert();
        regions
            .into_table(Region::Table)
            .columns([Region::Id, Region::Code, Region::Name, Region::RegionImageUrl])
            .on_conflict(OnConflict::column(Region::Id).do_nothing().to_owned());
        for r in REGIONS {
            regions
                .values([parse_id(r.id).into(), r.code.into(), r.name.into(), r.image_url.map(str::to_string).into()])
                .map_err(seed_err)?;
        }
        manager.exec_stmt(regions).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let region_ids: Vec<_> = REGIONS.iter().map(|r| parse_id(r.id)).collect();
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Region::Table)
                    .and_where(Expr::col(Region::Id).is_in(region_ids))
                    .to_owned(),
            )
            .await?;

        let difficulty_ids: Vec<_> = DIFFICULTIES.iter().map(|d| parse_id(d.id)).collect();
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Difficulty::Table)
                    .and_where(Expr::col(Difficulty::Id).is_in(difficulty_ids))
                    .to_owned(),
            )
            .await
    }
}
