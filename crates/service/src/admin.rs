//! Admin aggregate counts across the three categories.

use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::errors::ServiceError;
use crate::lifecycle::count_flagged;
use crate::record::{global, parish, youth};

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateCounts {
    pub global_count: u64,
    pub parish_count: u64,
    pub youth_count: u64,
}

/// Complete-and-not-deleted rows per category. Three independent queries;
/// the numbers are not a consistent snapshot under concurrent writes.
pub async fn aggregate_counts(db: &DatabaseConnection) -> Result<AggregateCounts, ServiceError> {
    let global_count = count_flagged::<global::Kind>(db, true).await?;
    let parish_count = count_flagged::<parish::Kind>(db, true).await?;
    let youth_count = count_flagged::<youth::Kind>(db, true).await?;
    Ok(AggregateCounts { global_count, parish_count, youth_count })
}
