use serde::{Deserialize, Serialize};

/// Role allowed to manage other accounts; accounts holding it cannot be
/// targeted by the admin password-change flow.
pub const ADMIN_ROLE: &str = "admin";

/// Login input. The intake frontend sends uppercase keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    #[serde(rename = "USERNAME", default)]
    pub username: String,
    #[serde(rename = "PASSWORD", default)]
    pub password: String,
}

/// Authenticated identity as embedded in tokens and request extensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
    pub role: String,
}

/// Stored account (hashed password only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

/// JWT payload for both access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

/// Successful login: identity plus both tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: AuthUser,
    pub token: String,
    pub refresh_token: String,
}
