pub use sea_orm_migration::prelude::*;

mod m20250301_000001_security;
mod m20250301_000002_organization;
mod m20250301_000003_training;
mod m20250301_000004_process;
mod m20250301_000005_change_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_security::Migration),
            Box::new(m20250301_000002_organization::Migration),
            Box::new(m20250301_000003_training::Migration),
            Box::new(m20250301_000004_process::Migration),
            Box::new(m20250301_000005_change_log::Migration),
        ]
    }
}
