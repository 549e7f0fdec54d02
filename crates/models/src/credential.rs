use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{map_db_err, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "credential")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_by_username<C: ConnectionTrait>(
    db: &C,
    username: &str,
) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::Username.eq(username))
        .one(db)
        .await
        .map_err(map_db_err)
}

/// Create or overwrite the account for `username` with an already-hashed
/// password.
pub async fn upsert<C: ConnectionTrait>(
    db: &C,
    username: &str,
    password_hash: String,
    role: &str,
) -> Result<Model, ModelError> {
    if username.trim().is_empty() {
        return Err(ModelError::Validation("username required".into()));
    }
    if password_hash.trim().is_empty() {
        return Err(ModelError::Validation("password hash required".into()));
    }
    let now = Utc::now().into();
    if let Some(existing) = find_by_username(db, username).await? {
        let mut am: ActiveModel = existing.into();
        am.password_hash = Set(password_hash);
        am.role = Set(role.to_string());
        am.updated_at = Set(now);
        am.update(db).await.map_err(map_db_err)
    } else {
        let am = ActiveModel {
            id: NotSet,
            username: Set(username.to_string()),
            password_hash: Set(password_hash),
            role: Set(role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        am.insert(db).await.map_err(map_db_err)
    }
}

pub async fn set_password_hash<C: ConnectionTrait>(
    db: &C,
    model: Model,
    password_hash: String,
) -> Result<Model, ModelError> {
    let mut am: ActiveModel = model.into();
    am.password_hash = Set(password_hash);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(map_db_err)
}
