//! Global census category: parishioners registered from abroad.

use sea_orm::{ColumnTrait, Condition, DatabaseConnection};

use models::global_record::{Column, Entity, Form, Model};

use super::{filled, given};
use crate::errors::ServiceError;
use crate::lifecycle::{self, RecordKind};

pub struct Kind;

impl RecordKind for Kind {
    type Entity = Entity;
    const ID_PREFIX: &'static str = "GLOB_";
    const NOUN: &'static str = "Global registration";
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

/// Completeness checklist for the global form. Street address, abroad
/// email, spouse/children and employer details are optional; the church
/// affiliation name is required only when the affiliation flag says "yes".
pub fn is_complete(form: &Form) -> bool {
    let required = [
        &form.form_number,
        &form.baptism_name,
        &form.full_name,
        &form.house_name,
        &form.date_of_birth,
        &form.age,
        &form.contact_number,
        &form.whats_app_number,
        &form.email,
        &form.country,
        &form.city,
        &form.postal_code,
        &form.contact_number_abroad,
        &form.whats_app_number_abroad,
        &form.occupation_or_field,
        &form.has_affiliated_with_any_church,
        &form.has_chance_for_sunday_mass,
        &form.unit,
        &form.maritial_status,
    ];
    if !required.into_iter().all(filled) {
        return false;
    }
    if form.has_affiliated_with_any_church.as_deref() == Some("yes")
        && !filled(&form.name_of_church_affiliated)
    {
        return false;
    }
    true
}

/// Store a new registration; returns the client-facing prefixed id.
pub async fn add(db: &DatabaseConnection, form: &Form, role: &str) -> Result<String, ServiceError> {
    let complete = is_complete(form);
    let created = models::global_record::insert(db, form, role, complete).await?;
    Ok(lifecycle::prefixed_id::<Kind>(created.id))
}

/// Full overwrite of an existing registration; the completeness flag is
/// recomputed from the submitted payload, so dropping a previously filled
/// field flips the record back to incomplete.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    form: &Form,
    role: &str,
) -> Result<Model, ServiceError> {
    let complete = is_complete(form);
    let updated = models::global_record::update(db, id, form, role, complete)
        .await
        .map_err(|e| match e {
            models::errors::ModelError::NotFound => {
                ServiceError::NotFound("No record found with the provided ID".into())
            }
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
    pub country: Option<String>,
    pub maritial_status: Option<String>,
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
        cond = cond.add(Column::ContactNumber.eq(mobile));
    }
    if let Some(unit) = given(&f.unit) {
        cond = cond.add(Column::Unit.contains(unit));
    }
    if let Some(country) = given(&f.country) {
        cond = cond.add(Column::CountryOfResidence.contains(country));
    }
    if let Some(status) = given(&f.maritial_status) {
        cond = cond.add(Column::MaritialStatus.contains(status));
    }
    cond
}

/// Search complete, non-deleted registrations. `limit: None` returns the
/// whole matching set (inherited behavior of this category only).
pub async fn search(
    db: &DatabaseConnection,
    filters: &SearchFilters,
    page: u64,
    limit: Option<u64>,
) -> Result<lifecycle::PagedRows<Model>, ServiceError> {
    lifecycle::search_page::<Kind>(db, search_condition(filters), page, limit).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    fn complete_form() -> Form {
        Form {
            form_number: Some("G100".into()),
            baptism_name: Some("Thomas".into()),
            full_name: Some("Thomas Mathew".into()),
            house_name: Some("Puthenpurayil".into()),
            date_of_birth: Some("1980-05-01".into()),
            age: Some("44".into()),
            contact_number: Some("9447000001".into()),
            whats_app_number: Some("9447000001".into()),
            email: Some("thomas@example.com".into()),
            country: Some("Ireland".into()),
            city: Some("Dublin".into()),
            postal_code: Some("D02".into()),
            contact_number_abroad: Some("+353100001".into()),
            whats_app_number_abroad: Some("+353100001".into()),
            occupation_or_field: Some("Nursing".into()),
            has_affiliated_with_any_church: Some("no".into()),
            has_chance_for_sunday_mass: Some("yes".into()),
            unit: Some("St Marys".into()),
            maritial_status: Some("married".into()),
            ..Default::default()
        }
    }

    #[test]
    fn full_form_is_complete() {
        assert!(is_complete(&complete_form()));
    }

    #[test]
    fn any_missing_required_field_is_incomplete() {
        let mut f = complete_form();
        f.postal_code = None;
        assert!(!is_complete(&f));

        let mut f = complete_form();
        f.email = Some(String::new());
        assert!(!is_complete(&f));
    }

    #[test]
    fn optional_fields_do_not_matter() {
        let mut f = complete_form();
        f.street_address = None;
        f.email_abroad = None;
        f.spouse_name = None;
        f.children_names = None;
        f.contacts_of_family = None;
        f.current_employer_or_institution = None;
        assert!(is_complete(&f));
    }

    #[test]
    fn church_affiliation_name_required_only_when_affiliated() {
        let mut f = complete_form();
        f.has_affiliated_with_any_church = Some("yes".into());
        f.name_of_church_affiliated = None;
        assert!(!is_complete(&f));

        f.name_of_church_affiliated = Some("St Patricks".into());
        assert!(is_complete(&f));
    }

    #[test]
    fn search_condition_composes_supplied_filters_only() {
        let filters = SearchFilters {
            name: Some("Mar".into()),
            country: Some("Ireland".into()),
            dob_from: Some("1980-01-01".into()),
            // missing dob_to drops the range clause entirely
            ..Default::default()
        };
        let sql = Entity::find()
            .filter(search_condition(&filters))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains("full_name"));
        assert!(sql.contains("LIKE"));
        assert!(sql.contains("country_of_residence"));
        assert!(!sql.contains("BETWEEN"));
        assert!(!sql.contains("maritial_status"));
    }

    #[test]
    fn blank_filters_are_skipped() {
        let filters = SearchFilters { name: Some(String::new()), ..Default::default() };
        let sql = Entity::find()
            .filter(search_condition(&filters))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(!sql.contains("full_name"));
    }
}
