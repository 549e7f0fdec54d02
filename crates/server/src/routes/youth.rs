//! Youth category endpoints. Sacrament flags travel as a nested object in
//! both directions.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use models::youth_record::{Form, Model, Sacraments};
use service::auth::domain::AuthUser;
use service::lifecycle;
use service::pagination::Pagination;
use service::record::youth::{self, Kind, SearchFilters};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;
use crate::routes::global::{require_id, IdBody, PageQuery};
use crate::routes::{created, message, paged};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YouthView {
    pub id: i32,
    pub prefixed_id: String,
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

impl From<Model> for YouthView {
    fn from(row: Model) -> Self {
        Self {
            prefixed_id: lifecycle::prefixed_id::<Kind>(row.id),
            id: row.id,
            form_number: row.form_number,
            full_name: row.full_name,
            date_of_birth: row.date_of_birth,
            age: row.age,
            gender: row.gender,
            permanent_address: row.permanent_address,
            current_address: row.current_address,
            mobile_number: row.mobile_number,
            whatsapp_number: row.whatsapp_number,
            email: row.email,
            educational_qualification: row.educational_qualification,
            current_occupation: row.current_occupation,
            professional_details: row.professional_details,
            current_course: row.current_course,
            sacraments: Sacraments {
                baptism: row.baptism,
                confirmation: row.confirmation,
                holy_communion: row.holy_communion,
            },
            pending_sacraments: row.pending_sacraments,
            has_organisation_group: row.has_organisation_group,
            organisation_group: row.organisation_group,
            has_parish_activity: row.has_parish_activity,
            parish_activity: row.parish_activity,
            is_outside_parish: row.is_outside_parish,
            is_student: row.is_student,
            country_city: row.country_city,
            parish_contact: row.parish_contact,
            residential_address: row.residential_address,
            is_attending_sunday_mass: row.is_attending_sunday_mass,
            sunday_mass_location: row.sunday_mass_location,
            house_name: row.house_name,
            parents_name: row.parents_name,
            parents_number: row.parents_number,
            unit: row.unit,
            specials: row.specials,
            health_issues: row.health_issues,
            additional_info: row.additional_info,
        }
    }
}

fn views(rows: Vec<Model>) -> Vec<YouthView> {
    rows.into_iter().map(YouthView::from).collect()
}

pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let (page, limit) = (q.page.unwrap_or(1), q.limit.unwrap_or(10));
    let data =
        lifecycle::list_page::<Kind>(&state.db, true, Pagination { page, per_page: limit }).await?;
    Ok(paged(views(data.rows), page, limit, data.total))
}

pub async fn list_incomplete(
    State(state): State<ServerState>,
    Query(q): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let (page, limit) = (q.page.unwrap_or(1), q.limit.unwrap_or(10));
    let data =
        lifecycle::list_page::<Kind>(&state.db, false, Pagination { page, per_page: limit }).await?;
    Ok(paged(views(data.rows), page, limit, data.total))
}

pub async fn list_deleted(
    State(state): State<ServerState>,
    Query(q): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let (page, limit) = (q.page.unwrap_or(1), q.limit.unwrap_or(10));
    let data =
        lifecycle::list_deleted::<Kind>(&state.db, Pagination { page, per_page: limit }).await?;
    Ok(paged(views(data.rows), page, limit, data.total))
}

pub async fn incomplete_count(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let count = lifecycle::count_flagged::<Kind>(&state.db, false).await?;
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "statusCode": 200,
            "isError": false,
            "responseData": { "incompleteCount": count },
        })),
    )
        .into_response())
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YouthSearchQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub name: Option<String>,
    pub dob_from: Option<String>,
    pub dob_to: Option<String>,
    pub mobile_number: Option<String>,
    pub unit: Option<String>,
    pub education: Option<String>,
}

pub async fn search(
    State(state): State<ServerState>,
    Query(q): Query<YouthSearchQuery>,
) -> Result<Response, ApiError> {
    let filters = SearchFilters {
        name: q.name,
        dob_from: q.dob_from,
        dob_to: q.dob_to,
        mobile_number: q.mobile_number,
        unit: q.unit,
        education: q.education,
    };
    let (page, limit) = (q.page.unwrap_or(1), q.limit.unwrap_or(10));
    let data = youth::search(&state.db, &filters, page, limit).await?;
    Ok(paged(views(data.rows), page, limit, data.total))
}

pub async fn add(
    State(state): State<ServerState>,
    Extension(user): Extension<AuthUser>,
    Json(form): Json<Form>,
) -> Result<Response, ApiError> {
    let prefixed_id = youth::add(&state.db, &form, &user.role).await?;
    Ok(created(&prefixed_id, "Youth registration created successfully"))
}

#[derive(Debug, Deserialize)]
pub struct UpdateBody {
    pub id: Option<i32>,
    #[serde(flatten)]
    pub form: Form,
}

pub async fn update(
    State(state): State<ServerState>,
    Json(body): Json<UpdateBody>,
) -> Result<Response, ApiError> {
    let id = require_id(body.id)?;
    youth::update(&state.db, id, &body.form).await?;
    Ok(message(StatusCode::OK, "Youth registration updated successfully"))
}

pub async fn delete(
    State(state): State<ServerState>,
    Json(body): Json<IdBody>,
) -> Result<Response, ApiError> {
    let id = require_id(body.id)?;
    lifecycle::set_deleted::<Kind>(&state.db, id, true).await?;
    Ok(message(StatusCode::OK, "Youth registration deleted successfully"))
}

pub async fn restore(
    State(state): State<ServerState>,
    Json(body): Json<IdBody>,
) -> Result<Response, ApiError> {
    let id = require_id(body.id)?;
    lifecycle::set_deleted::<Kind>(&state.db, id, false).await?;
    Ok(message(StatusCode::OK, "Youth registration restored successfully"))
}

pub async fn permanent_delete(
    State(state): State<ServerState>,
    Json(body): Json<IdBody>,
) -> Result<Response, ApiError> {
    let id = require_id(body.id)?;
    lifecycle::purge::<Kind>(&state.db, id).await?;
    Ok(message(StatusCode::OK, "Youth registration permanently deleted"))
}
