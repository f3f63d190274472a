//! Create `users` table.
//!
//! Stores registered identities; the email carries the uniqueness
//! constraint that registration relies on.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(big_integer(Users::Id).primary_key().auto_increment())
                    .col(string_len(Users::Email, 255).unique_key().not_null())
                    .col(string(Users::PassHash).not_null())
                    .col(boolean(Users::IsAdmin).not_null().default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Users { Table, Id, Email, PassHash, IsAdmin }
