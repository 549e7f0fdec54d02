//! Parish family-unit endpoints. Add/update require a session; the rest
//! of this surface ships unguarded, as inherited.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use models::parish_record::{Form, Model};
use service::auth::domain::AuthUser;
use service::lifecycle;
use service::pagination::Pagination;
use service::record::parish::{self, Kind, SearchFilters};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;
use crate::routes::global::{require_id, IdBody, PageQuery};
use crate::routes::{created, message, paged};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParishView {
    pub id: i32,
    pub prefixed_id: String,
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

impl From<Model> for ParishView {
    fn from(row: Model) -> Self {
        Self {
            prefixed_id: lifecycle::prefixed_id::<Kind>(row.id),
            id: row.id,
            form_number: row.form_number,
            family_name: row.family_name,
            address: row.address,
            contact_number: row.contact_number,
            email: row.email,
            head_name: row.head_name,
            head_age: row.head_age,
            head_occupation: row.head_occupation,
            member1_name: row.member1_name,
            member1_age: row.member1_age,
            member1_occupation: row.member1_occupation,
            member2_name: row.member2_name,
            member2_age: row.member2_age,
            member2_occupation: row.member2_occupation,
            member3_name: row.member3_name,
            member3_age: row.member3_age,
            member3_occupation: row.member3_occupation,
            child1_name: row.child1_name,
            child1_age: row.child1_age,
            child1_occupation: row.child1_occupation,
            child2_name: row.child2_name,
            child2_age: row.child2_age,
            child2_occupation: row.child2_occupation,
            child3_name: row.child3_name,
            child3_age: row.child3_age,
            child3_occupation: row.child3_occupation,
            child4_name: row.child4_name,
            child4_age: row.child4_age,
            child4_occupation: row.child4_occupation,
            health_concerns: row.health_concerns,
            financial_situation: row.financial_situation,
            educational_needs: row.educational_needs,
            special_concerns: row.special_concerns,
            attending_church: row.attending_church,
            need_sacraments: row.need_sacraments,
            prayer_requests: row.prayer_requests,
            is_parish_whatsapp_group: row.is_parish_whatsapp_group,
            suggested_mobile: row.suggested_mobile,
            general_observations: row.general_observations,
            additional_info: row.additional_info,
            unit: row.unit,
        }
    }
}

fn views(rows: Vec<Model>) -> Vec<ParishView> {
    rows.into_iter().map(ParishView::from).collect()
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
pub struct ParishSearchQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub name: Option<String>,
    pub mobile_number: Option<String>,
    pub unit: Option<String>,
    pub family_name: Option<String>,
}

pub async fn search(
    State(state): State<ServerState>,
    Query(q): Query<ParishSearchQuery>,
) -> Result<Response, ApiError> {
    let filters = SearchFilters {
        name: q.name,
        mobile_number: q.mobile_number,
        unit: q.unit,
        family_name: q.family_name,
    };
    let (page, limit) = (q.page.unwrap_or(1), q.limit.unwrap_or(10));
    let data = parish::search(&state.db, &filters, page, limit).await?;
    Ok(paged(views(data.rows), page, limit, data.total))
}

pub async fn add(
    State(state): State<ServerState>,
    Extension(user): Extension<AuthUser>,
    Json(form): Json<Form>,
) -> Result<Response, ApiError> {
    let prefixed_id = parish::add(&state.db, &form, &user.role).await?;
    Ok(created(&prefixed_id, "Parish registration created successfully"))
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
    parish::update(&state.db, id, &body.form, &user.role).await?;
    Ok(message(StatusCode::OK, "Parish registration updated successfully"))
}

pub async fn delete(
    State(state): State<ServerState>,
    Json(body): Json<IdBody>,
) -> Result<Response, ApiError> {
    let id = require_id(body.id)?;
    lifecycle::set_deleted::<Kind>(&state.db, id, true).await?;
    Ok(message(StatusCode::OK, "Parish registration deleted successfully"))
}

pub async fn restore(
    State(state): State<ServerState>,
    Json(body): Json<IdBody>,
) -> Result<Response, ApiError> {
    let id = require_id(body.id)?;
    lifecycle::set_deleted::<Kind>(&state.db, id, false).await?;
    Ok(message(StatusCode::OK, "Parish registration restored successfully"))
}

pub async fn permanent_delete(
    State(state): State<ServerState>,
    Json(body): Json<IdBody>,
) -> Result<Response, ApiError> {
    let id = require_id(body.id)?;
    lifecycle::purge::<Kind>(&state.db, id).await?;
    Ok(message(StatusCode::OK, "Parish registration permanently deleted"))
}
