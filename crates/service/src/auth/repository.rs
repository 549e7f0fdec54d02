use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::domain::Credential;
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_credential(&self, username: &str) -> Result<Option<Credential>, AuthError>;
    async fn upsert_credential(
        &self,
        username: &str,
        password_hash: String,
        role: &str,
    ) -> Result<Credential, AuthError>;

    /// Atomically verify the stored hash with `verify` and overwrite it
    /// with `new_hash`; implementations must not write when the check
    /// fails or the account is missing.
    async fn update_password_checked(
        &self,
        username: &str,
        new_hash: String,
        verify: &(dyn for<'a> Fn(&'a str) -> bool + Send + Sync),
    ) -> Result<(), AuthError>;

    async fn store_refresh_token(
        &self,
        token: &str,
        username: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AuthError>;
    async fn refresh_token_valid(&self, token: &str, now: DateTime<Utc>)
        -> Result<bool, AuthError>;
    /// Returns whether a token row was actually removed.
    async fn remove_refresh_token(&self, token: &str) -> Result<bool, AuthError>;
    async fn purge_expired_tokens(&self, now: DateTime<Utc>) -> Result<u64, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        creds: Mutex<HashMap<String, Credential>>,
        tokens: Mutex<HashMap<String, (String, DateTime<Utc>)>>,
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_credential(&self, username: &str) -> Result<Option<Credential>, AuthError> {
            let creds = self.creds.lock().unwrap();
            Ok(creds.get(username).cloned())
        }

        async fn upsert_credential(
            &self,
            username: &str,
            password_hash: String,
            role: &str,
        ) -> Result<Credential, AuthError> {
            let mut creds = self.creds.lock().unwrap();
            let c = Credential {
                username: username.to_string(),
                password_hash,
                role: role.to_string(),
            };
            creds.insert(username.to_string(), c.clone());
            Ok(c)
        }

        async fn update_password_checked(
            &self,
            username: &str,
            new_hash: String,
            verify: &(dyn for<'a> Fn(&'a str) -> bool + Send + Sync),
        ) -> Result<(), AuthError> {
            let mut creds = self.creds.lock().unwrap();
            let Some(cred) = creds.get_mut(username) else {
                return Err(AuthError::Unauthorized);
            };
            if !verify(&cred.password_hash) {
                return Err(AuthError::Unauthorized);
            }
            cred.password_hash = new_hash;
            Ok(())
        }

        async fn store_refresh_token(
            &self,
            token: &str,
            username: &str,
            expires_at: DateTime<Utc>,
        ) -> Result<(), AuthError> {
            let mut tokens = self.tokens.lock().unwrap();
            tokens.insert(token.to_string(), (username.to_string(), expires_at));
            Ok(())
        }

        async fn refresh_token_valid(
            &self,
            token: &str,
            now: DateTime<Utc>,
        ) -> Result<bool, AuthError> {
            let tokens = self.tokens.lock().unwrap();
            Ok(tokens.get(token).map_or(false, |(_, exp)| *exp > now))
        }

        async fn remove_refresh_token(&self, token: &str) -> Result<bool, AuthError> {
            let mut tokens = self.tokens.lock().unwrap();
            Ok(tokens.remove(token).is_some())
        }

        async fn purge_expired_tokens(&self, now: DateTime<Utc>) -> Result<u64, AuthError> {
            let mut tokens = self.tokens.lock().unwrap();
            let before = tokens.len();
            tokens.retain(|_, (_, exp)| *exp > now);
            Ok((before - tokens.len()) as u64)
        }
    }
}
