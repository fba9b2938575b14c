use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use priority_list_api::{build_app, config::Config, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        url = config.database.url(),
        pool_size = config.database.pool_size(),
        "Opening SQLite database"
    );
    let db = database::sqlite::connect_from_config(config.database.clone()).await?;

    // Creates the items table and seeds it on a fresh database
    database::sqlite::run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState { config, db };

    let app = build_app(&state)?;

    info!(
        "Starting {} v{} (shutdown timeout {:?})",
        state.config.app.name, state.config.app.version, state.config.server.shutdown_timeout
    );

    let db = state.db.clone();
    create_production_app(app, &state.config.server, async move {
        info!("Shutting down: closing database pool");
        match db.close().await {
            Ok(()) => info!("Database pool closed"),
            Err(e) => tracing::error!(error = %e, "Failed to close database pool"),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shutdown complete");
    Ok(())
}
