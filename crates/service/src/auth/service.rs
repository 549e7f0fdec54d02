use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument};

use super::domain::{AuthSession, AuthUser, LoginInput, TokenClaims, ADMIN_ROLE};
use super::errors::AuthError;
use super::repository::AuthRepository;

/// Auth service configuration. Access and refresh tokens are signed with
/// separate secrets so one cannot stand in for the other.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub refresh_secret: String,
    pub access_ttl_secs: i64,
    pub refresh_ttl_secs: i64,
}

impl AuthConfig {
    pub fn new(jwt_secret: String, refresh_secret: String) -> Self {
        // 30 minutes / 5 hours
        Self { jwt_secret, refresh_secret, access_ttl_secs: 1800, refresh_ttl_secs: 18000 }
    }
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self {
        Self { repo, cfg }
    }

    /// Authenticate a user and issue an access + refresh token pair.
    ///
    /// A missing account and a wrong password both surface as
    /// [`AuthError::Unauthorized`]; callers must not leak which one it was.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::LoginInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig::new("secret".into(), "refreshsecret".into()));
    /// tokio_test::block_on(svc.register("clerk", "Secret123", "editor")).unwrap();
    /// let session = tokio_test::block_on(svc.login(LoginInput { username: "clerk".into(), password: "Secret123".into() })).unwrap();
    /// assert_eq!(session.user.username, "clerk");
    /// assert!(!session.token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let cred = self
            .repo
            .find_credential(&input.username)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let parsed =
            PasswordHash::new(&cred.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            debug!("password mismatch");
            return Err(AuthError::Unauthorized);
        }

        // Expired sessions get swept here rather than on a timer.
        let now = Utc::now();
        let _ = self.repo.purge_expired_tokens(now).await?;

        let token = self.mint(&cred.username, &cred.role, self.cfg.access_ttl_secs, &self.cfg.jwt_secret)?;
        let refresh_token =
            self.mint(&cred.username, &cred.role, self.cfg.refresh_ttl_secs, &self.cfg.refresh_secret)?;
        let expires_at = now + Duration::seconds(self.cfg.refresh_ttl_secs);
        self.repo.store_refresh_token(&refresh_token, &cred.username, expires_at).await?;

        info!(username = %cred.username, role = %cred.role, "user_logged_in");
        Ok(AuthSession {
            user: AuthUser { username: cred.username, role: cred.role },
            token,
            refresh_token,
        })
    }

    /// Mint a new access token from a still-valid refresh token. The token
    /// must both exist in the persisted store and carry a good signature.
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh(&self, refresh_token: &str) -> Result<(String, TokenClaims), AuthError> {
        if !self.repo.refresh_token_valid(refresh_token, Utc::now()).await? {
            return Err(AuthError::Forbidden);
        }
        let data = decode::<TokenClaims>(
            refresh_token,
            &DecodingKey::from_secret(self.cfg.refresh_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AuthError::Forbidden)?;
        let claims = data.claims;
        let token = self.mint(&claims.sub, &claims.role, self.cfg.access_ttl_secs, &self.cfg.jwt_secret)?;
        Ok((token, claims))
    }

    /// Remove the refresh token from the store. Unknown tokens are a
    /// silent no-op so logout never fails after a restart.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AuthError> {
        let removed = self.repo.remove_refresh_token(refresh_token).await?;
        if removed {
            info!("refresh_token_revoked");
        }
        Ok(())
    }

    /// Change the caller's own password; verification and overwrite run
    /// atomically in the repository.
    #[instrument(skip(self, old_password, new_password), fields(username = %username))]
    pub async fn change_password(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        if old_password.is_empty() || new_password.is_empty() {
            return Err(AuthError::Validation("old and new password are required".into()));
        }
        let new_hash = self.hash_password(new_password)?;
        let old = old_password.to_string();
        let verify = move |stored: &str| {
            PasswordHash::new(stored)
                .map(|p| Argon2::default().verify_password(old.as_bytes(), &p).is_ok())
                .unwrap_or(false)
        };
        self.repo.update_password_checked(username, new_hash, &verify).await?;
        info!(username = %username, "password_changed");
        Ok(())
    }

    /// Privileged variant: an admin resets another account's password with
    /// the same verification sequence. Admin accounts cannot be targeted.
    #[instrument(skip(self, caller, old_password, new_password), fields(caller = %caller.username, target = %target))]
    pub async fn change_password_for(
        &self,
        caller: &AuthUser,
        target: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        if caller.role != ADMIN_ROLE {
            return Err(AuthError::Forbidden);
        }
        let cred = self.repo.find_credential(target).await?.ok_or(AuthError::Unauthorized)?;
        if cred.role == ADMIN_ROLE {
            return Err(AuthError::Forbidden);
        }
        self.change_password(target, old_password, new_password).await
    }

    /// Create or overwrite an account with a hashed password. Used by the
    /// startup bootstrap and by tests; there is no public signup surface.
    pub async fn register(&self, username: &str, password: &str, role: &str) -> Result<(), AuthError> {
        if username.trim().is_empty() {
            return Err(AuthError::Validation("username required".into()));
        }
        if password.len() < 6 {
            return Err(AuthError::Validation("password too short (>=6)".into()));
        }
        let hash = self.hash_password(password)?;
        self.repo.upsert_credential(username, hash, role).await?;
        info!(username = %username, role = %role, "credential_upserted");
        Ok(())
    }

    pub fn hash_password(&self, plain: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashError(e.to_string()))
    }

    fn mint(&self, username: &str, role: &str, ttl_secs: i64, secret: &str) -> Result<String, AuthError> {
        let exp = (Utc::now() + Duration::seconds(ttl_secs)).timestamp() as usize;
        let claims = TokenClaims { sub: username.to_string(), role: role.to_string(), exp };
        encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::mock::MockAuthRepository;

    fn service() -> AuthService<MockAuthRepository> {
        let repo = Arc::new(MockAuthRepository::default());
        AuthService::new(repo, AuthConfig::new("test-secret".into(), "test-refresh-secret".into()))
    }

    async fn seed(svc: &AuthService<MockAuthRepository>) {
        svc.register("clerk", "Secret123", "editor").await.unwrap();
    }

    fn decode_access(token: &str) -> TokenClaims {
        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::default(),
        )
        .unwrap()
        .claims
    }

    #[tokio::test]
    async fn login_issues_decodable_tokens() {
        let svc = service();
        seed(&svc).await;

        let session = svc
            .login(LoginInput { username: "clerk".into(), password: "Secret123".into() })
            .await
            .unwrap();
        assert_eq!(session.user.username, "clerk");
        assert_eq!(session.user.role, "editor");

        let claims = decode_access(&session.token);
        assert_eq!(claims.sub, "clerk");
        assert_eq!(claims.role, "editor");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_are_indistinguishable() {
        let svc = service();
        seed(&svc).await;

        let wrong = svc
            .login(LoginInput { username: "clerk".into(), password: "nope".into() })
            .await;
        let missing = svc
            .login(LoginInput { username: "ghost".into(), password: "nope".into() })
            .await;
        assert!(matches!(wrong, Err(AuthError::Unauthorized)));
        assert!(matches!(missing, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn refresh_round_trip() {
        let svc = service();
        seed(&svc).await;

        let session = svc
            .login(LoginInput { username: "clerk".into(), password: "Secret123".into() })
            .await
            .unwrap();
        let (token, claims) = svc.refresh(&session.refresh_token).await.unwrap();
        assert_eq!(claims.sub, "clerk");
        assert_eq!(decode_access(&token).sub, "clerk");
    }

    #[tokio::test]
    async fn refresh_rejects_unknown_and_revoked_tokens() {
        let svc = service();
        seed(&svc).await;

        assert!(matches!(svc.refresh("garbage").await, Err(AuthError::Forbidden)));

        let session = svc
            .login(LoginInput { username: "clerk".into(), password: "Secret123".into() })
            .await
            .unwrap();
        svc.logout(&session.refresh_token).await.unwrap();
        assert!(matches!(svc.refresh(&session.refresh_token).await, Err(AuthError::Forbidden)));
        // logging out again is a no-op, not an error
        svc.logout(&session.refresh_token).await.unwrap();
    }

    #[tokio::test]
    async fn change_password_swaps_credentials() {
        let svc = service();
        seed(&svc).await;

        svc.change_password("clerk", "Secret123", "Fresh456").await.unwrap();

        let old = svc
            .login(LoginInput { username: "clerk".into(), password: "Secret123".into() })
            .await;
        assert!(matches!(old, Err(AuthError::Unauthorized)));
        svc.login(LoginInput { username: "clerk".into(), password: "Fresh456".into() })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn change_password_rejects_wrong_old_password() {
        let svc = service();
        seed(&svc).await;

        let res = svc.change_password("clerk", "wrong", "Fresh456").await;
        assert!(matches!(res, Err(AuthError::Unauthorized)));
        // unchanged
        svc.login(LoginInput { username: "clerk".into(), password: "Secret123".into() })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn change_password_requires_both_fields() {
        let svc = service();
        seed(&svc).await;
        let res = svc.change_password("clerk", "Secret123", "").await;
        assert!(matches!(res, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn admin_variant_enforces_roles() {
        let svc = service();
        seed(&svc).await;
        svc.register("root", "RootPass1", ADMIN_ROLE).await.unwrap();

        let editor = AuthUser { username: "clerk".into(), role: "editor".into() };
        let admin = AuthUser { username: "root".into(), role: ADMIN_ROLE.into() };

        // non-admin caller
        let res = svc.change_password_for(&editor, "clerk", "Secret123", "Fresh456").await;
        assert!(matches!(res, Err(AuthError::Forbidden)));

        // admin targeting another admin
        let res = svc.change_password_for(&admin, "root", "RootPass1", "Fresh456").await;
        assert!(matches!(res, Err(AuthError::Forbidden)));

        // admin resetting an editor
        svc.change_password_for(&admin, "clerk", "Secret123", "Fresh456").await.unwrap();
        svc.login(LoginInput { username: "clerk".into(), password: "Fresh456".into() })
            .await
            .unwrap();
    }
}
