pub use sea_orm_migration::prelude::*;

mod m20250101_000000_create_items;
mod m20250101_000001_seed_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000000_create_items::Migration),
            Box::new(m20250101_000001_seed_items::Migration),
        ]
    }
}

/// Number of migrations that only create schema, without seed rows.
pub const SCHEMA_MIGRATIONS: u32 = 1;
