//! Youth category: individual registrations with sacrament tracking.

use sea_orm::{ColumnTrait, Condition, DatabaseConnection};

use models::youth_record::{Column, Entity, Form, Model};

use super::{filled, given};
use crate::errors::ServiceError;
use crate::lifecycle::{self, RecordKind};

pub struct Kind;

impl RecordKind for Kind {
    type Entity = Entity;
    const ID_PREFIX: &'static str = "YTH_";
    const NOUN: &'static str = "Youth registration";
    fn id_col() -> Column {
        Column::Id
    }
    fn is_complete_col() -> Column {
        Column::IsComplete
    }
    fn is_deleted_col() -> Column {
        Column::IsDeleted
    }
    fn created_at_col() -> Column {
        Column::CreatedAt
    }
}

/// Youth checklist: identity, contact and education blocks plus three
/// rules — organisation and activity names are required when their flags
/// say "yes", and at least one sacrament must be marked.
pub fn is_complete(form: &Form) -> bool {
    let required = [
        &form.form_number,
        &form.full_name,
        &form.date_of_birth,
        &form.age,
        &form.gender,
        &form.permanent_address,
        &form.mobile_number,
        &form.whatsapp_number,
        &form.educational_qualification,
        &form.current_occupation,
        &form.professional_details,
        &form.house_name,
        &form.parents_name,
        &form.parents_number,
        &form.unit,
    ];
    if !required.into_iter().all(filled) {
        return false;
    }
    if form.has_organisation_group.as_deref() == Some("yes") && !filled(&form.organisation_group) {
        return false;
    }
    if form.has_parish_activity.as_deref() == Some("yes") && !filled(&form.parish_activity) {
        return false;
    }
    form.sacraments.any()
}

pub async fn add(db: &DatabaseConnection, form: &Form, role: &str) -> Result<String, ServiceError> {
    let complete = is_complete(form);
    let created = models::youth_record::insert(db, form, role, complete).await?;
    Ok(lifecycle::prefixed_id::<Kind>(created.id))
}

pub async fn update(db: &DatabaseConnection, id: i32, form: &Form) -> Result<Model, ServiceError> {
    let complete = is_complete(form);
    let updated = models::youth_record::update(db, id, form, complete).await.map_err(|e| match e {
        models::errors::ModelError::NotFound => ServiceError::not_found(Kind::NOUN),
        other => other.into(),
    })?;
    Ok(updated)
}

#[derive(Debug, Default, Clone)]
pub struct SearchFilters {
    pub name: Option<String>,
    pub dob_from: Option<String>,
    pub dob_to: Option<String>,
    pub mobile_number: Option<String>,
    pub unit: Option<String>,
    pub education: Option<String>,
}

pub fn search_condition(f: &SearchFilters) -> Condition {
    let mut cond = Condition::all();
    if let Some(name) = given(&f.name) {
        cond = cond.add(Column::FullName.contains(name));
    }
    if let (Some(from), Some(to)) = (given(&f.dob_from), given(&f.dob_to)) {
        cond = cond.add(Column::DateOfBirth.between(from, to));
    }
    if let Some(mobile) = given(&f.mobile_number) {
        cond = cond.add(Column::MobileNumber.eq(mobile));
    }
    if let Some(unit) = given(&f.unit) {
        cond = cond.add(Column::Unit.eq(unit));
    }
    if let Some(education) = given(&f.education) {
        cond = cond.add(Column::EducationalQualification.eq(education));
    }
    cond
}

pub async fn search(
    db: &DatabaseConnection,
    filters: &SearchFilters,
    page: u64,
    limit: u64,
) -> Result<lifecycle::PagedRows<Model>, ServiceError> {
    lifecycle::search_page::<Kind>(db, search_condition(filters), page, Some(limit)).await
}
