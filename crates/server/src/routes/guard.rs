//! Bearer-token guard. Decorates the request with the authenticated
//! identity; guarded routers attach this as a route layer.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use jsonwebtoken::{decode, DecodingKey, Validation};

use service::auth::domain::{AuthUser, TokenClaims};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer ").or_else(|| v.strip_prefix("bearer ")))
}

/// Reject with 403 unless the request carries a valid, unexpired access
/// token; on success the claims are exposed as an [`AuthUser`] extension.
pub async fn require_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(&req) else {
        return ApiError::Forbidden("Forbidden - Missing Token".into()).into_response();
    };
    match decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(state.auth.jwt_secret.as_bytes()),
        &Validation::default(),
    ) {
        Ok(data) => {
            let user = AuthUser { username: data.claims.sub, role: data.claims.role };
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(_) => ApiError::Forbidden("Forbidden - Invalid Or Expired Token".into()).into_response(),
    }
}
