//! Parish family-unit category.

use sea_orm::{ColumnTrait, Condition, DatabaseConnection};

use models::parish_record::{Column, Entity, Form, Model};

use super::{filled, given};
use crate::errors::ServiceError;
use crate::lifecycle::{self, RecordKind};

pub struct Kind;

impl RecordKind for Kind {
    type Entity = Entity;
    const ID_PREFIX: &'static str = "PAR_";
    const NOUN: &'static str = "Parish registration";
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

/// Only the family identity and head-of-family block are required; member,
/// child and welfare fields never affect completeness.
pub fn is_complete(form: &Form) -> bool {
    [
        &form.form_number,
        &form.family_name,
        &form.address,
        &form.contact_number,
        &form.head_name,
        &form.head_age,
        &form.head_occupation,
    ]
    .into_iter()
    .all(filled)
}

pub async fn add(db: &DatabaseConnection, form: &Form, role: &str) -> Result<String, ServiceError> {
    let complete = is_complete(form);
    let created = models::parish_record::insert(db, form, role, complete).await?;
    Ok(lifecycle::prefixed_id::<Kind>(created.id))
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    form: &Form,
    role: &str,
) -> Result<Model, ServiceError> {
    let complete = is_complete(form);
    let updated = models::parish_record::update(db, id, form, role, complete)
        .await
        .map_err(|e| match e {
            models::errors::ModelError::NotFound => ServiceError::not_found(Kind::NOUN),
            other => other.into(),
        })?;
    Ok(updated)
}

#[derive(Debug, Default, Clone)]
pub struct SearchFilters {
    pub name: Option<String>,
    pub mobile_number: Option<String>,
    pub unit: Option<String>,
    pub family_name: Option<String>,
}

pub fn search_condition(f: &SearchFilters) -> Condition {
    let mut cond = Condition::all();
    if let Some(name) = given(&f.name) {
        cond = cond.add(Column::HeadName.contains(name));
    }
    if let Some(mobile) = given(&f.mobile_number) {
        cond = cond.add(Column::ContactNumber.contains(mobile));
    }
    if let Some(unit) = given(&f.unit) {
        cond = cond.add(Column::Unit.contains(unit));
    }
    if let Some(family) = given(&f.family_name) {
        cond = cond.add(Column::FamilyName.contains(family));
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

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    fn complete_form() -> Form {
        Form {
            form_number: Some("P55".into()),
            family_name: Some("Kannampuzha".into()),
            address: Some("Kottayam".into()),
            contact_number: Some("9447000002".into()),
            head_name: Some("Jose".into()),
            head_age: Some("61".into()),
            head_occupation: Some("Farmer".into()),
            ..Default::default()
        }
    }

    #[test]
    fn head_block_alone_is_complete() {
        assert!(is_complete(&complete_form()));
    }

    #[test]
    fn missing_head_field_is_incomplete() {
        let mut f = complete_form();
        f.head_age = Some(String::new());
        assert!(!is_complete(&f));
    }

    #[test]
    fn members_and_welfare_fields_are_optional() {
        let mut f = complete_form();
        f.member1_name = None;
        f.child1_name = None;
        f.health_concerns = None;
        f.email = None;
        assert!(is_complete(&f));
    }

    #[test]
    fn search_matches_are_substrings() {
        let filters = SearchFilters {
            name: Some("Jos".into()),
            family_name: Some("Kann".into()),
            ..Default::default()
        };
        let sql = Entity::find()
            .filter(search_condition(&filters))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains("head_name"));
        assert!(sql.contains("family_name"));
        assert!(sql.contains("LIKE"));
        assert!(!sql.contains("unit"));
    }
}
