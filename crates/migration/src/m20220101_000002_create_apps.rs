//! Create `apps` table.
//!
//! Client applications are pre-provisioned with operator-assigned ids and
//! two distinct signing secrets (access and refresh).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Apps::Table)
                    .if_not_exists()
                    .col(integer(Apps::Id).primary_key())
                    .col(string_len(Apps::Name, 128).unique_key().not_null())
                    .col(string(Apps::Secret).not_null())
                    .col(string(Apps::RefreshSecret).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Apps::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Apps { Table, Id, Name, Secret, RefreshSecret }
