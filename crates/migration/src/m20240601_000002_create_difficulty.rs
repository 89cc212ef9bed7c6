//! Create `difficulty` lookup table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Difficulty::Table)
                    .if_not_exists()
                    .col(uuid(Difficulty::Id).primary_key())
                    .col(string_len(Difficulty::Name, 50).unique_key().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Difficulty::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Difficulty { Table, Id, Name }
