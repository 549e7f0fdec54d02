use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

/// Dashboard counts: complete, non-deleted rows per category. Three
/// independent queries; not a consistent snapshot.
pub async fn counts(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let counts = service::admin::aggregate_counts(&state.db).await?;
    Ok((
        StatusCode::OK,
        Json(json!({
            "statusCode": 200,
            "isError": false,
            "responseData": counts,
        })),
    )
        .into_response())
}
