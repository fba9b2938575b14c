//! Application state management.

use database::sqlite::DatabaseConnection;

/// Shared application state.
///
/// Cloned into each router; the connection clone shares the same pool, and
/// therefore the same in-memory database.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
