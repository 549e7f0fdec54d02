//! Shared record lifecycle for the three census categories.
//!
//! The categories are structurally identical for everything except their
//! field lists: paginated listings over the completeness flag, a
//! soft-delete / restore / hard-delete state machine keyed on affected
//! rows, and aggregate counts. `RecordKind` captures the per-category
//! pieces (entity, id prefix, flag columns) so the queries exist once.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Per-category plumbing for the generic lifecycle queries.
pub trait RecordKind
where
    <Self::Entity as EntityTrait>::Model: Send + Sync,
{
    type Entity: EntityTrait;
    /// Client-facing id prefix, e.g. `GLOB_`.
    const ID_PREFIX: &'static str;
    /// Noun used in not-found messages.
    const NOUN: &'static str;
    fn id_col() -> <Self::Entity as EntityTrait>::Column;
    fn is_complete_col() -> <Self::Entity as EntityTrait>::Column;
    fn is_deleted_col() -> <Self::Entity as EntityTrait>::Column;
    fn created_at_col() -> <Self::Entity as EntityTrait>::Column;
}

/// `GLOB_17`, `PAR_3`, `YTH_120`, ...
pub fn prefixed_id<K: RecordKind>(id: i32) -> String {
    format!("{}{}", K::ID_PREFIX, id)
}

/// Mandatory flag clause appended to every listing and search.
pub fn flag_filter<K: RecordKind>(complete: bool, deleted: bool) -> Condition {
    Condition::all()
        .add(K::is_complete_col().eq(complete))
        .add(K::is_deleted_col().eq(deleted))
}

pub struct PagedRows<M> {
    pub rows: Vec<M>,
    pub total: u64,
}

/// Paginated listing of non-deleted rows with the given completeness,
/// newest first. Data page and total are two independent queries; under
/// concurrent writes the total may disagree with the page.
pub async fn list_page<K: RecordKind>(
    db: &DatabaseConnection,
    complete: bool,
    page: Pagination,
) -> Result<PagedRows<<K::Entity as EntityTrait>::Model>, ServiceError> {
    let filter = flag_filter::<K>(complete, false);
    let (offset, limit) = page.normalize();
    let rows = <K::Entity as EntityTrait>::find()
        .filter(filter.clone())
        .order_by_desc(K::created_at_col())
        .offset(offset)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let total = <K::Entity as EntityTrait>::find()
        .filter(filter)
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(PagedRows { rows, total })
}

/// Soft-deleted rows. Mirrors the intake tool's behavior of only surfacing
/// complete records in the recycle-bin view.
pub async fn list_deleted<K: RecordKind>(
    db: &DatabaseConnection,
    page: Pagination,
) -> Result<PagedRows<<K::Entity as EntityTrait>::Model>, ServiceError> {
    let filter = flag_filter::<K>(true, true);
    let (offset, limit) = page.normalize();
    let rows = <K::Entity as EntityTrait>::find()
        .filter(filter.clone())
        .offset(offset)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let total = <K::Entity as EntityTrait>::find()
        .filter(filter)
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(PagedRows { rows, total })
}

/// Unpaginated dump of all complete, non-deleted rows, newest first.
pub async fn export_complete<K: RecordKind>(
    db: &DatabaseConnection,
) -> Result<Vec<<K::Entity as EntityTrait>::Model>, ServiceError> {
    <K::Entity as EntityTrait>::find()
        .filter(flag_filter::<K>(true, false))
        .order_by_desc(K::created_at_col())
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Search with caller-supplied filters on top of the mandatory flag
/// clause. `limit: None` skips pagination and returns the full matching
/// set (the global category's inherited behavior).
pub async fn search_page<K: RecordKind>(
    db: &DatabaseConnection,
    filters: Condition,
    page: u64,
    limit: Option<u64>,
) -> Result<PagedRows<<K::Entity as EntityTrait>::Model>, ServiceError> {
    let cond = filters.add(flag_filter::<K>(true, false));
    let mut query = <K::Entity as EntityTrait>::find().filter(cond.clone());
    if let Some(limit) = limit {
        let (offset, limit) = Pagination { page, per_page: limit }.normalize();
        query = query.offset(offset).limit(limit);
    }
    let rows = query.all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let total = <K::Entity as EntityTrait>::find()
        .filter(cond)
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(PagedRows { rows, total })
}

/// Flip the soft-delete flag. The update only matches a row currently in
/// the opposite state, so deleting an already-deleted record (or restoring
/// an active one) reports not-found exactly like a missing id.
pub async fn set_deleted<K: RecordKind>(
    db: &DatabaseConnection,
    id: i32,
    deleted: bool,
) -> Result<(), ServiceError> {
    let res = <K::Entity as EntityTrait>::update_many()
        .col_expr(K::is_deleted_col(), Expr::value(deleted))
        .filter(K::id_col().eq(id))
        .filter(K::is_deleted_col().eq(!deleted))
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(K::NOUN));
    }
    Ok(())
}

/// Hard delete, valid from either lifecycle state. Irreversible.
pub async fn purge<K: RecordKind>(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = <K::Entity as EntityTrait>::delete_many()
        .filter(K::id_col().eq(id))
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(K::NOUN));
    }
    Ok(())
}

/// Count of non-deleted rows with the given completeness.
pub async fn count_flagged<K: RecordKind>(
    db: &DatabaseConnection,
    complete: bool,
) -> Result<u64, ServiceError> {
    <K::Entity as EntityTrait>::find()
        .filter(flag_filter::<K>(complete, false))
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}
