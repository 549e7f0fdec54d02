use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("record not found")]
    NotFound,
    #[error("duplicate value violates a unique constraint")]
    Conflict,
    #[error("database error: {0}")]
    Db(String),
}

/// Collapse driver errors into the model taxonomy: an update that matched
/// no row is `NotFound`, a unique violation is `Conflict`, anything else
/// keeps its text for logging upstream.
pub fn map_db_err(e: DbErr) -> ModelError {
    if matches!(e, DbErr::RecordNotUpdated) {
        return ModelError::NotFound;
    }
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ModelError::Conflict,
        _ => ModelError::Db(e.to_string()),
    }
}
