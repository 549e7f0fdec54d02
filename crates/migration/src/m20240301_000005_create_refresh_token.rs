//! Create `refresh_token` table.
//!
//! Persisted refresh-token store; rows outlive process restarts and are
//! removed on logout or expiry.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RefreshToken::Table)
                    .if_not_exists()
                    .col(uuid(RefreshToken::Id).primary_key())
                    .col(text(RefreshToken::Token).unique_key().not_null())
                    .col(string_len(RefreshToken::Username, 128).not_null())
                    .col(timestamp_with_time_zone(RefreshToken::ExpiresAt))
                    .col(timestamp_with_time_zone(RefreshToken::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RefreshToken::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum RefreshToken { Table, Id, Token, Username, ExpiresAt, CreatedAt }
