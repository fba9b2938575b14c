//! OpenAPI documentation configuration

use axum_helpers::ErrorResponse;
use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Priority List API",
        version = "0.1.0",
        description = "Task list with P1 to P3 priorities",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/items", api = domain_items::ApiDoc)
    ),
    components(schemas(ErrorResponse))
)]
pub struct ApiDoc;
