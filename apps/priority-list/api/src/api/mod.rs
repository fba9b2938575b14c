//! API routes module

pub mod health;
pub mod items;

use axum::Router;
use domain_items::{ApiResource, entity};

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new().nest(entity::Model::URL, items::router(state))
}
