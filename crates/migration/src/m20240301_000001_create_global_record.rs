//! Create `global_record` table.
//!
//! One row per global census form; `form_number` is unique across the table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GlobalRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(GlobalRecord::Id))
                    // Nullable so incomplete submissions can land; still unique.
                    .col(
                        ColumnDef::new(GlobalRecord::FormNumber)
                            .string_len(64)
                            .null()
                            .unique_key(),
                    )
                    .col(string_null(GlobalRecord::BaptismName))
                    .col(string_null(GlobalRecord::HouseName))
                    .col(string_null(GlobalRecord::FullName))
                    .col(string_null(GlobalRecord::DateOfBirth))
                    .col(string_null(GlobalRecord::Age))
                    .col(string_null(GlobalRecord::ContactNumber))
                    .col(string_null(GlobalRecord::AdditionalInfo))
                    .col(string_null(GlobalRecord::WhatsappNumber))
                    .col(string_null(GlobalRecord::Email))
                    .col(string_null(GlobalRecord::CountryOfResidence))
                    .col(string_null(GlobalRecord::City))
                    .col(string_null(GlobalRecord::StreetAddress))
                    .col(string_null(GlobalRecord::PostalCode))
                    .col(string_null(GlobalRecord::ContactNumberAbroad))
                    .col(string_null(GlobalRecord::WhatsappNumberAbroad))
                    .col(string_null(GlobalRecord::EmailAbroad))
                    .col(string_null(GlobalRecord::SpouseName))
                    .col(string_null(GlobalRecord::ChildrenNames))
                    .col(string_null(GlobalRecord::ContactsOfFamily))
                    .col(string_null(GlobalRecord::OccupationOrField))
                    .col(string_null(GlobalRecord::CurrentEmployerOrInstitution))
                    .col(string_null(GlobalRecord::HasAffiliatedWithAnyChurch))
                    .col(string_null(GlobalRecord::NameOfChurchAffiliated))
                    .col(string_null(GlobalRecord::HasChanceForSundayMass))
                    .col(string_null(GlobalRecord::ContactInfoParishPriest))
                    .col(string_null(GlobalRecord::Unit))
                    .col(string_null(GlobalRecord::MaritialStatus))
                    .col(string_null(GlobalRecord::DataAddedBy))
                    .col(boolean(GlobalRecord::IsComplete))
                    .col(boolean(GlobalRecord::IsDeleted).default(false))
                    .col(timestamp_with_time_zone(GlobalRecord::CreatedAt))
                    .col(timestamp_with_time_zone(GlobalRecord::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(GlobalRecord::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum GlobalRecord {
    Table,
    Id,
    FormNumber,
    BaptismName,
    HouseName,
    FullName,
    DateOfBirth,
    Age,
    ContactNumber,
    AdditionalInfo,
    WhatsappNumber,
    Email,
    CountryOfResidence,
    City,
    StreetAddress,
    PostalCode,
    ContactNumberAbroad,
    WhatsappNumberAbroad,
    EmailAbroad,
    SpouseName,
    ChildrenNames,
    ContactsOfFamily,
    OccupationOrField,
    CurrentEmployerOrInstitution,
    HasAffiliatedWithAnyChurch,
    NameOfChurchAffiliated,
    HasChanceForSundayMass,
    ContactInfoParishPriest,
    Unit,
    MaritialStatus,
    DataAddedBy,
    IsComplete,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
