//! Global census category endpoints. The only category with an
//! unpaginated export, and the only one whose search skips pagination
//! entirely when no limit is supplied.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use models::global_record::{Form, Model};
use service::auth::domain::AuthUser;
use service::lifecycle;
use service::pagination::Pagination;
use service::record::global::{self, Kind, SearchFilters};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;
use crate::routes::{created, message, paged, unpaged};

/// Client-facing row shape; wire names kept from the original API,
/// `ocupationOrField` spelling included.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalView {
    pub id: i32,
    pub prefixed_id: String,
    pub form_number: Option<String>,
    pub house_name: Option<String>,
    pub baptism_name: Option<String>,
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
    pub contacts_of_family: Option<String>,
    #[serde(rename = "ocupationOrField")]
    pub occupation_or_field: Option<String>,
    pub current_employer_or_institution: Option<String>,
    pub has_affiliated_with_any_church: Option<String>,
    pub name_of_church_affiliated: Option<String>,
    pub has_chance_for_sunday_mass: Option<String>,
    pub contact_info_parish_priest: Option<String>,
    pub unit: Option<String>,
    pub data_added_by: Option<String>,
    pub maritial_status: Option<String>,
}

impl From<Model> for GlobalView {
    fn from(row: Model) -> Self {
        Self {
            prefixed_id: lifecycle::prefixed_id::<Kind>(row.id),
            id: row.id,
            form_number: row.form_number,
            house_name: row.house_name,
            baptism_name: row.baptism_name,
            full_name: row.full_name,
            date_of_birth: row.date_of_birth,
            age: row.age,
            contact_number: row.contact_number,
            additional_info: row.additional_info,
            whats_app_number: row.whatsapp_number,
            email: row.email,
            country: row.country_of_residence,
            city: row.city,
            street_address: row.street_address,
            postal_code: row.postal_code,
            contact_number_abroad: row.contact_number_abroad,
            whats_app_number_abroad: row.whatsapp_number_abroad,
            email_abroad: row.email_abroad,
            spouse_name: row.spouse_name,
            children_names: row.children_names,
            contacts_of_family: row.contacts_of_family,
            occupation_or_field: row.occupation_or_field,
            current_employer_or_institution: row.current_employer_or_institution,
            has_affiliated_with_any_church: row.has_affiliated_with_any_church,
            name_of_church_affiliated: row.name_of_church_affiliated,
            has_chance_for_sunday_mass: row.has_chance_for_sunday_mass,
            contact_info_parish_priest: row.contact_info_parish_priest,
            unit: row.unit,
            data_added_by: row.data_added_by,
            maritial_status: row.maritial_status,
        }
    }
}

fn views(rows: Vec<Model>) -> Vec<GlobalView> {
    rows.into_iter().map(GlobalView::from).collect()
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct IdBody {
    pub id: Option<i32>,
}

pub(crate) fn require_id(id: Option<i32>) -> Result<i32, ApiError> {
    id.ok_or_else(|| ApiError::Validation("id is required".into()))
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
pub struct GlobalSearchQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub name: Option<String>,
    pub dob_from: Option<String>,
    pub dob_to: Option<String>,
    pub mobile_number: Option<String>,
    pub unit: Option<String>,
    pub country: Option<String>,
    pub maritial_status: Option<String>,
}

/// Search complete registrations. Omitting `limit` dumps the whole
/// matching set with a zeroed pagination block.
pub async fn search(
    State(state): State<ServerState>,
    Query(q): Query<GlobalSearchQuery>,
) -> Result<Response, ApiError> {
    let filters = SearchFilters {
        name: q.name,
        dob_from: q.dob_from,
        dob_to: q.dob_to,
        mobile_number: q.mobile_number,
        unit: q.unit,
        country: q.country,
        maritial_status: q.maritial_status,
    };
    let page = q.page.unwrap_or(1);
    let data = global::search(&state.db, &filters, page, q.limit).await?;
    match q.limit {
        Some(limit) => Ok(paged(views(data.rows), page, limit, data.total)),
        None => Ok(unpaged(views(data.rows))),
    }
}

/// Unfiltered export of all complete registrations for spreadsheets.
pub async fn export(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let rows = lifecycle::export_complete::<Kind>(&state.db).await?;
    Ok(unpaged(views(rows)))
}

pub async fn add(
    State(state): State<ServerState>,
    Extension(user): Extension<AuthUser>,
    Json(form): Json<Form>,
) -> Result<Response, ApiError> {
    let prefixed_id = global::add(&state.db, &form, &user.role).await?;
    Ok(created(&prefixed_id, "Global registration created successfully"))
}

#[derive(Debug, Deserialize)]
pub struct UpdateBody {
    pub id: Option<i32>,
    #[serde(flatten)]
    pub form: Form,
}

pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<UpdateBody>,
) -> Result<Response, ApiError> {
    let id = require_id(body.id)?;
    global::update(&state.db, id, &body.form, &user.role).await?;
    Ok(message(StatusCode::OK, "Global registration updated successfully"))
}

pub async fn delete(
    State(state): State<ServerState>,
    Json(body): Json<IdBody>,
) -> Result<Response, ApiError> {
    let id = require_id(body.id)?;
    lifecycle::set_deleted::<Kind>(&state.db, id, true).await?;
    Ok(message(StatusCode::OK, "Global registration deleted successfully"))
}

pub async fn restore(
    State(state): State<ServerState>,
    Json(body): Json<IdBody>,
) -> Result<Response, ApiError> {
    let id = require_id(body.id)?;
    lifecycle::set_deleted::<Kind>(&state.db, id, false).await?;
    Ok(message(StatusCode::OK, "Global registration restored successfully"))
}

pub async fn permanent_delete(
    State(state): State<ServerState>,
    Json(body): Json<IdBody>,
) -> Result<Response, ApiError> {
    let id = require_id(body.id)?;
    lifecycle::purge::<Kind>(&state.db, id).await?;
    Ok(message(StatusCode::OK, "Global registration permanently deleted"))
}
