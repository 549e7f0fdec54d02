//! Parish family-unit registrations: head of family plus up to three
//! members and four children, with welfare follow-up fields.
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{map_db_err, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parish_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub form_number: Option<String>,
    pub family_name: Option<String>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub head_name: Option<String>,
    pub head_age: Option<String>,
    pub head_occupation: Option<String>,
    pub member1_name: Option<String>,
    pub member1_age: Option<String>,
    pub member1_occupation: Option<String>,
    pub member2_name: Option<String>,
    pub member2_age: Option<String>,
    pub member2_occupation: Option<String>,
    pub member3_name: Option<String>,
    pub member3_age: Option<String>,
    pub member3_occupation: Option<String>,
    pub child1_name: Option<String>,
    pub child1_age: Option<String>,
    pub child1_occupation: Option<String>,
    pub child2_name: Option<String>,
    pub child2_age: Option<String>,
    pub child2_occupation: Option<String>,
    pub child3_name: Option<String>,
    pub child3_age: Option<String>,
    pub child3_occupation: Option<String>,
    pub child4_name: Option<String>,
    pub child4_age: Option<String>,
    pub child4_occupation: Option<String>,
    pub health_concerns: Option<String>,
    pub financial_situation: Option<String>,
    pub educational_needs: Option<String>,
    pub special_concerns: Option<String>,
    pub attending_church: Option<String>,
    pub need_sacraments: Option<String>,
    pub prayer_requests: Option<String>,
    pub is_parish_whatsapp_group: Option<String>,
    pub suggested_mobile: Option<String>,
    pub general_observations: Option<String>,
    pub additional_info: Option<String>,
    pub unit: Option<String>,
    pub data_added_by: Option<String>,
    pub is_complete: bool,
    pub is_deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Form {
    pub form_number: Option<String>,
    pub family_name: Option<String>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub head_name: Option<String>,
    pub head_age: Option<String>,
    pub head_occupation: Option<String>,
    pub member1_name: Option<String>,
    pub member1_age: Option<String>,
    pub member1_occupation: Option<String>,
    pub member2_name: Option<String>,
    pub member2_age: Option<String>,
    pub member2_occupation: Option<String>,
    pub member3_name: Option<String>,
    pub member3_age: Option<String>,
    pub member3_occupation: Option<String>,
    pub child1_name: Option<String>,
    pub child1_age: Option<String>,
    pub child1_occupation: Option<String>,
    pub child2_name: Option<String>,
    pub child2_age: Option<String>,
    pub child2_occupation: Option<String>,
    pub child3_name: Option<String>,
    pub child3_age: Option<String>,
    pub child3_occupation: Option<String>,
    pub child4_name: Option<String>,
    pub child4_age: Option<String>,
    pub child4_occupation: Option<String>,
    pub health_concerns: Option<String>,
    pub financial_situation: Option<String>,
    pub educational_needs: Option<String>,
    pub special_concerns: Option<String>,
    pub attending_church: Option<String>,
    pub need_sacraments: Option<String>,
    pub prayer_requests: Option<String>,
    pub is_parish_whatsapp_group: Option<String>,
    pub suggested_mobile: Option<String>,
    pub general_observations: Option<String>,
    pub additional_info: Option<String>,
    pub unit: Option<String>,
}

fn from_form(form: &Form, complete: bool) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        form_number: Set(form.form_number.clone()),
        family_name: Set(form.family_name.clone()),
        address: Set(form.address.clone()),
        contact_number: Set(form.contact_number.clone()),
        email: Set(form.email.clone()),
        head_name: Set(form.head_name.clone()),
        head_age: Set(form.head_age.clone()),
        head_occupation: Set(form.head_occupation.clone()),
        member1_name: Set(form.member1_name.clone()),
        member1_age: Set(form.member1_age.clone()),
        member1_occupation: Set(form.member1_occupation.clone()),
        member2_name: Set(form.member2_name.clone()),
        member2_age: Set(form.member2_age.clone()),
        member2_occupation: Set(form.member2_occupation.clone()),
        member3_name: Set(form.member3_name.clone()),
        member3_age: Set(form.member3_age.clone()),
        member3_occupation: Set(form.member3_occupation.clone()),
        child1_name: Set(form.child1_name.clone()),
        child1_age: Set(form.child1_age.clone()),
        child1_occupation: Set(form.child1_occupation.clone()),
        child2_name: Set(form.child2_name.clone()),
        child2_age: Set(form.child2_age.clone()),
        child2_occupation: Set(form.child2_occupation.clone()),
        child3_name: Set(form.child3_name.clone()),
        child3_age: Set(form.child3_age.clone()),
        child3_occupation: Set(form.child3_occupation.clone()),
        child4_name: Set(form.child4_name.clone()),
        child4_age: Set(form.child4_age.clone()),
        child4_occupation: Set(form.child4_occupation.clone()),
        health_concerns: Set(form.health_concerns.clone()),
        financial_situation: Set(form.financial_situation.clone()),
        educational_needs: Set(form.educational_needs.clone()),
        special_concerns: Set(form.special_concerns.clone()),
        attending_church: Set(form.attending_church.clone()),
        need_sacraments: Set(form.need_sacraments.clone()),
        prayer_requests: Set(form.prayer_requests.clone()),
        is_parish_whatsapp_group: Set(form.is_parish_whatsapp_group.clone()),
        suggested_mobile: Set(form.suggested_mobile.clone()),
        general_observations: Set(form.general_observations.clone()),
        additional_info: Set(form.additional_info.clone()),
        unit: Set(form.unit.clone()),
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
