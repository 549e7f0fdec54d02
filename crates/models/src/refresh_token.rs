//! Persisted refresh-token store. A row exists while the session may still
//! be renewed; logout or expiry removes it. Restarting the process no
//! longer invalidates outstanding refresh tokens.
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{map_db_err, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "refresh_token")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text", unique)]
    pub token: String,
    pub username: String,
    pub expires_at: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    token: &str,
    username: &str,
    expires_at: DateTime<Utc>,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        token: Set(token.to_string()),
        username: Set(username.to_string()),
        expires_at: Set(expires_at.into()),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(map_db_err)
}

/// True when the token is present and not yet expired at `now`.
pub async fn is_valid<C: ConnectionTrait>(
    db: &C,
    token: &str,
    now: DateTime<Utc>,
) -> Result<bool, ModelError> {
    let found = Entity::find()
        .filter(Column::Token.eq(token))
        .filter(Column::ExpiresAt.gt(now))
        .one(db)
        .await
        .map_err(map_db_err)?;
    Ok(found.is_some())
}

/// Remove the token; returns whether a row was deleted. Removing an
/// unknown token is a silent no-op for callers.
pub async fn remove<C: ConnectionTrait>(db: &C, token: &str) -> Result<bool, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::Token.eq(token))
        .exec(db)
        .await
        .map_err(map_db_err)?;
    Ok(res.rows_affected > 0)
}

/// Drop expired rows; called opportunistically on login.
pub async fn purge_expired<C: ConnectionTrait>(
    db: &C,
    now: DateTime<Utc>,
) -> Result<u64, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::ExpiresAt.lte(now))
        .exec(db)
        .await
        .map_err(map_db_err)?;
    Ok(res.rows_affected)
}
