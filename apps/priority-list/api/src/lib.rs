//! Priority list HTTP service
//!
//! Routes:
//! - `/api/items` (list, create) and `/api/items/{id}` (get, update priority)
//! - `/health` and `/ready`
//! - `/swagger-ui` backed by `/api-docs/openapi.json`

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use state::AppState;

/// Assemble the full application router.
pub fn build_app(state: &AppState) -> std::io::Result<Router> {
    let api_routes = api::routes(state);

    let router = create_router::<openapi::ApiDoc>(api_routes)?;

    Ok(router
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.clone())))
}
