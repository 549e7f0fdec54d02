//! Create `parish_record` table.
//!
//! Family-unit record: head of family, up to three members and four
//! children, plus welfare fields.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParishRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(ParishRecord::Id))
                    .col(
                        ColumnDef::new(ParishRecord::FormNumber)
                            .string_len(64)
                            .null()
                            .unique_key(),
                    )
                    .col(string_null(ParishRecord::FamilyName))
                    .col(string_null(ParishRecord::Address))
                    .col(string_null(ParishRecord::ContactNumber))
                    .col(string_null(ParishRecord::Email))
                    .col(string_null(ParishRecord::HeadName))
                    .col(string_null(ParishRecord::HeadAge))
                    .col(string_null(ParishRecord::HeadOccupation))
                    .col(string_null(ParishRecord::Member1Name))
                    .col(string_null(ParishRecord::Member1Age))
                    .col(string_null(ParishRecord::Member1Occupation))
                    .col(string_null(ParishRecord::Member2Name))
                    .col(string_null(ParishRecord::Member2Age))
                    .col(string_null(ParishRecord::Member2Occupation))
                    .col(string_null(ParishRecord::Member3Name))
                    .col(string_null(ParishRecord::Member3Age))
                    .col(string_null(ParishRecord::Member3Occupation))
                    .col(string_null(ParishRecord::Child1Name))
                    .col(string_null(ParishRecord::Child1Age))
                    .col(string_null(ParishRecord::Child1Occupation))
                    .col(string_null(ParishRecord::Child2Name))
                    .col(string_null(ParishRecord::Child2Age))
                    .col(string_null(ParishRecord::Child2Occupation))
                    .col(string_null(ParishRecord::Child3Name))
                    .col(string_null(ParishRecord::Child3Age))
                    .col(string_null(ParishRecord::Child3Occupation))
                    .col(string_null(ParishRecord::Child4Name))
                    .col(string_null(ParishRecord::Child4Age))
                    .col(string_null(ParishRecord::Child4Occupation))
                    .col(string_null(ParishRecord::HealthConcerns))
                    .col(string_null(ParishRecord::FinancialSituation))
                    .col(string_null(ParishRecord::EducationalNeeds))
                    .col(string_null(ParishRecord::SpecialConcerns))
                    .col(string_null(ParishRecord::AttendingChurch))
                    .col(string_null(ParishRecord::NeedSacraments))
                    .col(string_null(ParishRecord::PrayerRequests))
                    .col(string_null(ParishRecord::IsParishWhatsappGroup))
                    .col(string_null(ParishRecord::SuggestedMobile))
                    .col(string_null(ParishRecord::GeneralObservations))
                    .col(string_null(ParishRecord::AdditionalInfo))
                    .col(string_null(ParishRecord::Unit))
                    .col(string_null(ParishRecord::DataAddedBy))
                    .col(boolean(ParishRecord::IsComplete))
                    .col(boolean(ParishRecord::IsDeleted).default(false))
                    .col(timestamp_with_time_zone(ParishRecord::CreatedAt))
                    .col(timestamp_with_time_zone(ParishRecord::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ParishRecord::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ParishRecord {
    Table,
    Id,
    FormNumber,
    FamilyName,
    Address,
    ContactNumber,
    Email,
    HeadName,
    HeadAge,
    HeadOccupation,
    Member1Name,
    Member1Age,
    Member1Occupation,
    Member2Name,
    Member2Age,
    Member2Occupation,
    Member3Name,
    Member3Age,
    Member3Occupation,
    Child1Name,
    Child1Age,
    Child1Occupation,
    Child2Name,
    Child2Age,
    Child2Occupation,
    Child3Name,
    Child3Age,
    Child3Occupation,
    Child4Name,
    Child4Age,
    Child4Occupation,
    HealthConcerns,
    FinancialSituation,
    EducationalNeeds,
    SpecialConcerns,
    AttendingChurch,
    NeedSacraments,
    PrayerRequests,
    IsParishWhatsappGroup,
    SuggestedMobile,
    GeneralObservations,
    AdditionalInfo,
    Unit,
    DataAddedBy,
    IsComplete,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
