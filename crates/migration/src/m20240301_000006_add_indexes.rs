use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Every listing filters on the completeness/deletion flags.
        manager
            .create_index(
                Index::create()
                    .name("idx_global_flags")
                    .table(GlobalRecord::Table)
                    .col(GlobalRecord::IsComplete)
                    .col(GlobalRecord::IsDeleted)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_parish_flags")
                    .table(ParishRecord::Table)
                    .col(ParishRecord::IsComplete)
                    .col(ParishRecord::IsDeleted)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_youth_flags")
                    .table(YouthRecord::Table)
                    .col(YouthRecord::IsComplete)
                    .col(YouthRecord::IsDeleted)
                    .to_owned(),
            )
            .await?;

        // Listings order by creation time.
        manager
            .create_index(
                Index::create()
                    .name("idx_global_created")
                    .table(GlobalRecord::Table)
                    .col(GlobalRecord::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_parish_created")
                    .table(ParishRecord::Table)
                    .col(ParishRecord::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_youth_created")
                    .table(YouthRecord::Table)
                    .col(YouthRecord::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Refresh-token expiry sweep.
        manager
            .create_index(
                Index::create()
                    .name("idx_refresh_expires")
                    .table(RefreshToken::Table)
                    .col(RefreshToken::ExpiresAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_global_flags").table(GlobalRecord::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_parish_flags").table(ParishRecord::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_youth_flags").table(YouthRecord::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_global_created").table(GlobalRecord::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_parish_created").table(ParishRecord::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_youth_created").table(YouthRecord::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_refresh_expires").table(RefreshToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GlobalRecord { Table, IsComplete, IsDeleted, CreatedAt }

#[derive(DeriveIden)]
enum ParishRecord { Table, IsComplete, IsDeleted, CreatedAt }

#[derive(DeriveIden)]
enum YouthRecord { Table, IsComplete, IsDeleted, CreatedAt }

#[derive(DeriveIden)]
enum RefreshToken { Table, ExpiresAt }
