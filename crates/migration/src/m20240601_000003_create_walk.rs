//! Create `walk` table.
//! Every walk belongs to exactly one region and one difficulty.
use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240601_000001_create_region::Region;
use crate::m20240601_000002_create_difficulty::Difficulty;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Walk::Table)
                    .if_not_exists()
                    .col(uuid(Walk::Id).primary_key())
                    .col(string_len(Walk::Name, 100).not_null())
                    .col(string_len(Walk::Description, 1000).not_null())
                    .col(double(Walk::LengthInKm).not_null())
                    .col(text_null(Walk::WalkImageUrl))
                    .col(uuid(Walk::RegionId).not_null())
                    .col(uuid(Walk::DifficultyId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_walk_region")
                            .from(Walk::Table, Walk::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_walk_difficulty")
                            .from(Walk::Table, Walk::DifficultyId)
                            .to(Difficulty::Table, Difficulty::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_walk_region_id")
                    .table(Walk::Table)
                    .col(Walk::RegionId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_walk_difficulty_id")
                    .table(Walk::Table)
                    .col(Walk::DifficultyId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Walk::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Walk {
    Table,
    Id,
    Name,
    Description,
    LengthInKm,
    WalkImageUrl,
    RegionId,
    DifficultyId,
}
