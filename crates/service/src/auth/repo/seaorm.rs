use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::auth::domain::Credential;
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

fn repo_err(e: impl std::fmt::Display) -> AuthError {
    AuthError::Repository(e.to_string())
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_credential(&self, username: &str) -> Result<Option<Credential>, AuthError> {
        let res = models::credential::find_by_username(&self.db, username)
            .await
            .map_err(repo_err)?;
        Ok(res.map(|c| Credential {
            username: c.username,
            password_hash: c.password_hash,
            role: c.role,
        }))
    }

    async fn upsert_credential(
        &self,
        username: &str,
        password_hash: String,
        role: &str,
    ) -> Result<Credential, AuthError> {
        let c = models::credential::upsert(&self.db, username, password_hash, role)
            .await
            .map_err(repo_err)?;
        Ok(Credential { username: c.username, password_hash: c.password_hash, role: c.role })
    }

    /// Read-compare-write inside one transaction: the row is fetched, the
    /// old hash verified, and the new hash written, with rollback on any
    /// failure including the verification itself.
    async fn update_password_checked(
        &self,
        username: &str,
        new_hash: String,
        verify: &(dyn for<'a> Fn(&'a str) -> bool + Send + Sync),
    ) -> Result<(), AuthError> {
        let txn = self.db.begin().await.map_err(repo_err)?;
        let found = models::credential::find_by_username(&txn, username).await.map_err(repo_err)?;
        let Some(cred) = found else {
            let _ = txn.rollback().await;
            return Err(AuthError::Unauthorized);
        };
        if !verify(&cred.password_hash) {
            let _ = txn.rollback().await;
            return Err(AuthError::Unauthorized);
        }
        if let Err(e) = models::credential::set_password_hash(&txn, cred, new_hash).await {
            let _ = txn.rollback().await;
            return Err(repo_err(e));
        }
        txn.commit().await.map_err(repo_err)?;
        Ok(())
    }

    async fn store_refresh_token(
        &self,
        token: &str,
        username: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AuthError> {
        models::refresh_token::insert(&self.db, token, username, expires_at)
            .await
            .map_err(repo_err)?;
        Ok(())
    }

    async fn refresh_token_valid(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, AuthError> {
        models::refresh_token::is_valid(&self.db, token, now).await.map_err(repo_err)
    }

    async fn remove_refresh_token(&self, token: &str) -> Result<bool, AuthError> {
        models::refresh_token::remove(&self.db, token).await.map_err(repo_err)
    }

    async fn purge_expired_tokens(&self, now: DateTime<Utc>) -> Result<u64, AuthError> {
        models::refresh_token::purge_expired(&self.db, now).await.map_err(repo_err)
    }
}
