//! Global census registrations: parishioners living abroad, one row per
//! submitted form. `form_number` is unique; everything else is free text
//! captured as the intake UI sends it.
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{map_db_err, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "global_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub form_number: Option<String>,
    pub baptism_name: Option<String>,
    pub house_name: Option<String>,
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub age: Option<String>,
    pub contact_number: Option<String>,
    pub additional_info: Option<String>,
    pub whatsapp_number: Option<String>,
    pub email: Option<String>,
    pub country_of_residence: Option<String>,
    pub city: Option<String>,
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
    pub contact_number_abroad: Option<String>,
    pub whatsapp_number_abroad: Option<String>,
    pub email_abroad: Option<String>,
    pub spouse_name: Option<String>,
    pub children_names: Option<String>,
    pub contacts_of_family: Option<String>,
    pub occupation_or_field: Option<String>,
    pub current_employer_or_institution: Option<String>,
    pub has_affiliated_with_any_church: Option<String>,
    pub name_of_church_affiliated: Option<String>,
    pub has_chance_for_sunday_mass: Option<String>,
    pub contact_info_parish_priest: Option<String>,
    pub unit: Option<String>,
    pub maritial_status: Option<String>,
    pub data_added_by: Option<String>,
    pub is_complete: bool,
    pub is_deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Submitted form payload. Wire names are the intake UI's camelCase keys,
/// historical misspellings included (`ocupationOrField`, `contacsOfFamily`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Form {
    pub form_number: Option<String>,
    pub baptism_name: Option<String>,
    pub house_name: Option<String>,
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub age: Option<String>,
    pub contact_number: Option<String>,
    pub additional_info: Option<String>,
    pub whats_app_number: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
    pub contact_number_abroad: Option<String>,
    pub whats_app_number_abroad: Option<String>,
    pub email_abroad: Option<String>,
    pub spouse_name: Option<String>,
    pub children_names: Option<String>,
    #[serde(rename = "contacsOfFamily")]
    pub contacts_of_family: Option<String>,
    #[serde(rename = "ocupationOrField")]
    pub occupation_or_field: Option<String>,
    pub current_employer_or_institution: Option<String>,
    pub has_affiliated_with_any_church: Option<String>,
    pub name_of_church_affiliated: Option<String>,
    pub has_chance_for_sunday_mass: Option<String>,
    pub contact_info_parish_priest: Option<String>,
    pub unit: Option<String>,
    pub maritial_status: Option<String>,
}

fn from_form(form: &Form, complete: bool) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        form_number: Set(form.form_number.clone()),
        baptism_name: Set(form.baptism_name.clone()),
        house_name: Set(form.house_name.clone()),
        full_name: Set(form.full_name.clone()),
        date_of_birth: Set(form.date_of_birth.clone()),
        age: Set(form.age.clone()),
        contact_number: Set(form.contact_number.clone()),
        additional_info: Set(form.additional_info.clone()),
        whatsapp_number: Set(form.whats_app_number.clone()),
        email: Set(form.email.clone()),
        country_of_residence: Set(form.country.clone()),
        city: Set(form.city.clone()),
        street_address: Set(form.street_address.clone()),
        postal_code: Set(form.postal_code.clone()),
        contact_number_abroad: Set(form.contact_number_abroad.clone()),
        whatsapp_number_abroad: Set(form.whats_app_number_abroad.clone()),
        email_abroad: Set(form.email_abroad.clone()),
        spouse_name: Set(form.spouse_name.clone()),
        children_names: Set(form.children_names.clone()),
        contacts_of_family: Set(form.contacts_of_family.clone()),
        occupation_or_field: Set(form.occupation_or_field.clone()),
        current_employer_or_institution: Set(form.current_employer_or_institution.clone()),
        has_affiliated_with_any_church: Set(form.has_affiliated_with_any_church.clone()),
        name_of_church_affiliated: Set(form.name_of_church_affiliated.clone()),
        has_chance_for_sunday_mass: Set(form.has_chance_for_sunday_mass.clone()),
        contact_info_parish_priest: Set(form.contact_info_parish_priest.clone()),
        unit: Set(form.unit.clone()),
        maritial_status: Set(form.maritial_status.clone()),
        data_added_by: NotSet,
        is_complete: Set(complete),
        is_deleted: NotSet,
        created_at: NotSet,
        updated_at: NotSet,
    }
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    form: &Form,
    added_by: &str,
    complete: bool,
) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let mut am = from_form(form, complete);
    am.data_added_by = Set(Some(added_by.to_string()));
    am.is_deleted = Set(false);
    am.created_at = Set(now);
    am.updated_at = Set(now);
    am.insert(db).await.map_err(map_db_err)
}

/// Full overwrite of every form-backed column; `is_deleted` and
/// `created_at` are left untouched.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    form: &Form,
    added_by: &str,
    complete: bool,
) -> Result<Model, ModelError> {
    let mut am = from_form(form, complete);
    am.id = Set(id);
    am.data_added_by = Set(Some(added_by.to_string()));
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(map_db_err)
}
