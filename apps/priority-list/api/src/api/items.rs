//! Items API routes

use axum::Router;
use domain_items::{ItemService, SqliteItemRepository, handlers};

use crate::state::AppState;

/// Create items router
pub fn router(state: &AppState) -> Router {
    let repository = SqliteItemRepository::new(state.db.clone());
    let service = ItemService::new(repository);

    handlers::router(service)
}
