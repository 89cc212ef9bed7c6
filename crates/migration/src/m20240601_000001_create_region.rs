//! Create `region` table.
//!
//! Walks reference it; deleting a region cascades to its walks.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Region::Table)
                    .if_not_exists()
                    .col(uuid(Region::Id).primary_key())
                    .col(string_len(Region::Code, 10).not_null())
                    .col(string_len(Region::Name, 100).not_null())
                    .col(text_null(Region::RegionImageUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Region::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Region { Table, Id, Code, Name, RegionImageUrl }
