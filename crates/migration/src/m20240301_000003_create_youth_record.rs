//! Create `youth_record` table.
//!
//! Individual youth registration; sacrament flags are real booleans.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(YouthRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(YouthRecord::Id))
                    .col(
                        ColumnDef::new(YouthRecord::FormNumber)
                            .string_len(64)
                            .null()
                            .unique_key(),
                    )
                    .col(string_null(YouthRecord::FullName))
                    .col(string_null(YouthRecord::DateOfBirth))
                    .col(string_null(YouthRecord::Age))
                    .col(string_null(YouthRecord::Gender))
                    .col(string_null(YouthRecord::PermanentAddress))
                    .col(string_null(YouthRecord::CurrentAddress))
                    .col(string_null(YouthRecord::MobileNumber))
                    .col(string_null(YouthRecord::WhatsappNumber))
                    .col(string_null(YouthRecord::Email))
                    .col(string_null(YouthRecord::EducationalQualification))
                    .col(string_null(YouthRecord::CurrentOccupation))
                    .col(string_null(YouthRecord::ProfessionalDetails))
                    .col(string_null(YouthRecord::CurrentCourse))
                    .col(boolean(YouthRecord::Baptism).default(false))
                    .col(boolean(YouthRecord::Confirmation).default(false))
                    .col(boolean(YouthRecord::HolyCommunion).default(false))
                    .col(string_null(YouthRecord::PendingSacraments))
                    .col(string_null(YouthRecord::HasOrganisationGroup))
                    .col(string_null(YouthRecord::OrganisationGroup))
                    .col(string_null(YouthRecord::HasParishActivity))
                    .col(string_null(YouthRecord::ParishActivity))
                    .col(string_null(YouthRecord::IsOutsideParish))
                    .col(string_null(YouthRecord::IsStudent))
                    .col(string_null(YouthRecord::CountryCity))
                    .col(string_null(YouthRecord::ParishContact))
                    .col(string_null(YouthRecord::ResidentialAddress))
                    .col(string_null(YouthRecord::IsAttendingSundayMass))
                    .col(string_null(YouthRecord::SundayMassLocation))
                    .col(string_null(YouthRecord::HouseName))
                    .col(string_null(YouthRecord::ParentsName))
                    .col(string_null(YouthRecord::ParentsNumber))
                    .col(string_null(YouthRecord::Unit))
                    .col(string_null(YouthRecord::Specials))
                    .col(string_null(YouthRecord::HealthIssues))
                    .col(string_null(YouthRecord::AdditionalInfo))
                    .col(string_null(YouthRecord::DataAddedBy))
                    .col(boolean(YouthRecord::IsComplete))
                    .col(boolean(YouthRecord::IsDeleted).default(false))
                    .col(timestamp_with_time_zone(YouthRecord::CreatedAt))
                    .col(timestamp_with_time_zone(YouthRecord::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(YouthRecord::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum YouthRecord {
    Table,
    Id,
    FormNumber,
    FullName,
    DateOfBirth,
    Age,
    Gender,
    PermanentAddress,
    CurrentAddress,
    MobileNumber,
    WhatsappNumber,
    Email,
    EducationalQualification,
    CurrentOccupation,
    ProfessionalDetails,
    CurrentCourse,
    Baptism,
    Confirmation,
    HolyCommunion,
    PendingSacraments,
    HasOrganisationGroup,
    OrganisationGroup,
    HasParishActivity,
    ParishActivity,
    IsOutsideParish,
    IsStudent,
    CountryCity,
    ParishContact,
    ResidentialAddress,
    IsAttendingSundayMass,
    SundayMassLocation,
    HouseName,
    ParentsName,
    ParentsNumber,
    Unit,
    Specials,
    HealthIssues,
    AdditionalInfo,
    DataAddedBy,
    IsComplete,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
