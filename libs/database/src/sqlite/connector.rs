use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::sqlx::ConnectOptions as _;
use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use sea_orm_migration::MigratorTrait;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use super::SqliteConfig;
use crate::common::{DatabaseError, DatabaseResult};

/// Connect to a SQLite database with default settings
///
/// ```ignore
/// let db = database::sqlite::connect("sqlite::memory:").await?;
/// ```
pub async fn connect(database_url: &str) -> DatabaseResult<DatabaseConnection> {
    connect_from_config(SqliteConfig::new(database_url)).await
}

/// Connect using a [`SqliteConfig`]
///
/// Pooled connections never expire, so an in-memory database keeps its
/// contents for as long as the returned connection is alive.
pub async fn connect_from_config(config: SqliteConfig) -> DatabaseResult<DatabaseConnection> {
    let mut options = SqliteConnectOptions::from_str(config.url())
        .map_err(|e| DatabaseError::ConfigError(format!("Invalid DATABASE_URL: {e}")))?
        .create_if_missing(true);

    if !config.sqlx_logging {
        options = options.disable_statement_logging();
    }

    let pool_size = config.pool_size();
    let pool = SqlitePoolOptions::new()
        .max_connections(pool_size)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!(
        memory = config.is_memory(),
        pool_size, "Successfully connected to SQLite database"
    );

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Run database migrations using the provided Migrator
///
/// ```ignore
/// use migration::Migrator;
///
/// run_migrations::<Migrator>(&db, "priority_list_api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}
