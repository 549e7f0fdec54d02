//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_global_record;
mod m20240301_000002_create_parish_record;
mod m20240301_000003_create_youth_record;
mod m20240301_000004_create_credential;
mod m20240301_000005_create_refresh_token;
mod m20240301_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_global_record::Migration),
            Box::new(m20240301_000002_create_parish_record::Migration),
            Box::new(m20240301_000003_create_youth_record::Migration),
            Box::new(m20240301_000004_create_credential::Migration),
            Box::new(m20240301_000005_create_refresh_token::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000006_add_indexes::Migration),
        ]
    }
}
