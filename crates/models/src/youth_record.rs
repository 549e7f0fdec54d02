//! Youth registrations. Sacrament flags arrive nested under `sacraments`
//! on the wire and are flattened into three boolean columns here.
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{map_db_err, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "youth_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub form_number: Option<String>,
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub permanent_address: Option<String>,
    pub current_address: Option<String>,
    pub mobile_number: Option<String>,
    pub whatsapp_number: Option<String>,
    pub email: Option<String>,
    pub educational_qualification: Option<String>,
    pub current_occupation: Option<String>,
    pub professional_details: Option<String>,
    pub current_course: Option<String>,
    pub baptism: bool,
    pub confirmation: bool,
    pub holy_communion: bool,
    pub pending_sacraments: Option<String>,
    pub has_organisation_group: Option<String>,
    pub organisation_group: Option<String>,
    pub has_parish_activity: Option<String>,
    pub parish_activity: Option<String>,
    pub is_outside_parish: Option<String>,
    pub is_student: Option<String>,
    pub country_city: Option<String>,
    pub parish_contact: Option<String>,
    pub residential_address: Option<String>,
    pub is_attending_sunday_mass: Option<String>,
    pub sunday_mass_location: Option<String>,
    pub house_name: Option<String>,
    pub parents_name: Option<String>,
    pub parents_number: Option<String>,
    pub unit: Option<String>,
    pub specials: Option<String>,
    pub health_issues: Option<String>,
    pub additional_info: Option<String>,
    pub data_added_by: Option<String>,
    pub is_complete: bool,
    pub is_deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Sacrament flags as the wire carries them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sacraments {
    pub baptism: bool,
    pub confirmation: bool,
    pub holy_communion: bool,
}

impl Sacraments {
    pub fn any(&self) -> bool {
        self.baptism || self.confirmation || self.holy_communion
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Form {
    pub form_number: Option<String>,
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub permanent_address: Option<String>,
    pub current_address: Option<String>,
    pub mobile_number: Option<String>,
    pub whatsapp_number: Option<String>,
    pub email: Option<String>,
    pub educational_qualification: Option<String>,
    pub current_occupation: Option<String>,
    pub professional_details: Option<String>,
    pub current_course: Option<String>,
    pub sacraments: Sacraments,
    pub pending_sacraments: Option<String>,
    pub has_organisation_group: Option<String>,
    pub organisation_group: Option<String>,
    pub has_parish_activity: Option<String>,
    pub parish_activity: Option<String>,
    pub is_outside_parish: Option<String>,
    pub is_student: Option<String>,
    pub country_city: Option<String>,
    pub parish_contact: Option<String>,
    pub residential_address: Option<String>,
    pub is_attending_sunday_mass: Option<String>,
    pub sunday_mass_location: Option<String>,
    pub house_name: Option<String>,
    pub parents_name: Option<String>,
    pub parents_number: Option<String>,
    pub unit: Option<String>,
    pub specials: Option<String>,
    pub health_issues: Option<String>,
    pub additional_info: Option<String>,
}

fn from_form(form: &Form, complete: bool) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        form_number: Set(form.form_number.clone()),
        full_name: Set(form.full_name.clone()),
        date_of_birth: Set(form.date_of_birth.clone()),
        age: Set(form.age.clone()),
        gender: Set(form.gender.clone()),
        permanent_address: Set(form.permanent_address.clone()),
        current_address: Set(form.current_address.clone()),
        mobile_number: Set(form.mobile_number.clone()),
        whatsapp_number: Set(form.whatsapp_number.clone()),
        email: Set(form.email.clone()),
        educational_qualification: Set(form.educational_qualification.clone()),
        current_occupation: Set(form.current_occupation.clone()),
        professional_details: Set(form.professional_details.clone()),
        current_course: Set(form.current_course.clone()),
        baptism: Set(form.sacraments.baptism),
        confirmation: Set(form.sacraments.confirmation),
        holy_communion: Set(form.sacraments.holy_communion),
        pending_sacraments: Set(form.pending_sacraments.clone()),
        has_organisation_group: Set(form.has_organisation_group.clone()),
        organisation_group: Set(form.organisation_group.clone()),
        has_parish_activity: Set(form.has_parish_activity.clone()),
        parish_activity: Set(form.parish_activity.clone()),
        is_outside_parish: Set(form.is_outside_parish.clone()),
        is_student: Set(form.is_student.clone()),
        country_city: Set(form.country_city.clone()),
        parish_contact: Set(form.parish_contact.clone()),
        residential_address: Set(form.residential_address.clone()),
        is_attending_sunday_mass: Set(form.is_attending_sunday_mass.clone()),
        sunday_mass_location: Set(form.sunday_mass_location.clone()),
        house_name: Set(form.house_name.clone()),
        parents_name: Set(form.parents_name.clone()),
        parents_number: Set(form.parents_number.clone()),
        unit: Set(form.unit.clone()),
        specials: Set(form.specials.clone()),
        health_issues: Set(form.health_issues.clone()),
        additional_info: Set(form.additional_info.clone()),
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

/// Full overwrite. Unlike the other categories the submitter role is
/// captured only at creation time and is not rewritten here.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    form: &Form,
    complete: bool,
) -> Result<Model, ModelError> {
    let mut am = from_form(form, complete);
    am.id = Set(id);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(map_db_err)
}
