//! SQLite test infrastructure
//!
//! Each `TestDatabase` is a private in-memory database, so tests run in
//! parallel without sharing rows.

use migration::{Migrator, MigratorTrait, SCHEMA_MIGRATIONS};
use sea_orm::DatabaseConnection;

/// Test database wrapper
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// In-memory database with the schema and the three seed items
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// let conn = db.connection();
    /// # }
    /// ```
    pub async fn new() -> Self {
        Self::migrated(None).await
    }

    /// In-memory database with the schema but no rows
    pub async fn empty() -> Self {
        Self::migrated(Some(SCHEMA_MIGRATIONS)).await
    }

    async fn migrated(steps: Option<u32>) -> Self {
        let connection = database::sqlite::connect(database::sqlite::MEMORY_URL)
            .await
            .expect("Failed to open in-memory SQLite database");

        Migrator::up(&connection, steps)
            .await
            .expect("Failed to run migrations");

        tracing::debug!(?steps, "Test database ready (SQLite in-memory)");

        Self { connection }
    }

    /// Get a cloned connection (shares the underlying pool)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Close the pool so later queries fail, for exercising error paths
    pub async fn close(&self) {
        self.connection
            .clone()
            .close()
            .await
            .expect("Failed to close test database");
    }
}
