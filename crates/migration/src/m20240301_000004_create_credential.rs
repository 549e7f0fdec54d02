//! Create `credential` table.
//!
//! Login accounts: unique username, argon2 hash, role string.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Credential::Table)
                    .if_not_exists()
                    .col(pk_auto(Credential::Id))
                    .col(string_len(Credential::Username, 128).unique_key().not_null())
                    .col(string_len(Credential::PasswordHash, 255).not_null())
                    .col(string_len(Credential::Role, 32).not_null())
                    .col(timestamp_with_time_zone(Credential::CreatedAt))
                    .col(timestamp_with_time_zone(Credential::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Credential::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Credential { Table, Id, Username, PasswordHash, Role, CreatedAt, UpdatedAt }
