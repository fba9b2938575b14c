use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ErrorResponse, LenientJson,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity::{self, ApiResource};
use crate::error::{ItemFailure, ItemOperation};
use crate::models::{CreateItemRequest, Item, Priority, UpdatePriorityRequest};
use crate::repository::ItemRepository;
use crate::service::ItemService;
use crate::validation::{parse_item_id, require_priority};

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item),
    components(
        schemas(Item, Priority, CreateItemRequest, UpdatePriorityRequest, ErrorResponse),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = entity::Model::TAG, description = "Prioritised task list")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item))
        .with_state(shared_service)
}

/// List all items, newest first
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "List of items", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> Result<Json<Vec<Item>>, ItemFailure> {
    let items = service
        .list_items()
        .await
        .map_err(|e| e.during(ItemOperation::List))?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    LenientJson(input): LenientJson<CreateItemRequest>,
) -> Result<impl IntoResponse, ItemFailure> {
    let item = service
        .create_item(input)
        .await
        .map_err(|e| e.during(ItemOperation::Create))?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Item>, ItemFailure> {
    let op = ItemOperation::Get;
    let id = parse_item_id(&raw_id).map_err(|e| e.during(op))?;
    let item = service.get_item(id).await.map_err(|e| e.during(op))?;
    Ok(Json(item))
}

/// Change the priority of an item
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    request_body = UpdatePriorityRequest,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(raw_id): Path<String>,
    LenientJson(input): LenientJson<UpdatePriorityRequest>,
) -> Result<Json<Item>, ItemFailure> {
    let op = ItemOperation::Update;
    let id = match parse_item_id(&raw_id) {
        Ok(id) => id,
        Err(err) => {
            // The body is judged before the id, as for ids that parse
            require_priority(input.priority.as_ref()).map_err(|e| e.during(op))?;
            return Err(err.during(op));
        }
    };

    let item = service
        .update_priority(id, input)
        .await
        .map_err(|e| e.during(op))?;
    Ok(Json(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ItemError;
    use crate::repository::MockItemRepository;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const STORAGE_DETAIL: &str = "SQLITE_IOERR: disk I/O error";

    fn failing_repository() -> MockItemRepository {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Err(ItemError::Database(STORAGE_DETAIL.to_string())));
        mock_repo
            .expect_create()
            .returning(|_| Err(ItemError::Database(STORAGE_DETAIL.to_string())));
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(ItemError::Database(STORAGE_DETAIL.to_string())));
        mock_repo
            .expect_update_priority()
            .returning(|_, _| Err(ItemError::Database(STORAGE_DETAIL.to_string())));
        mock_repo
    }

    async fn send(method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let app = router(ItemService::new(failing_repository()));

        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_storage_failures_use_operation_messages() {
        let cases = [
            ("GET", "/", None, "Failed to fetch items"),
            (
                "POST",
                "/",
                Some(json!({"name": "Task"})),
                "Failed to create item",
            ),
            ("GET", "/1", None, "Failed to fetch item"),
            (
                "PUT",
                "/1",
                Some(json!({"priority": "P1"})),
                "Failed to update item",
            ),
        ];

        for (method, uri, body, expected) in cases {
            let (status, body) = send(method, uri, body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
            assert_eq!(body, json!({ "error": expected }));
        }
    }

    #[tokio::test]
    async fn test_validation_short_circuits_storage() {
        let (status, body) = send("POST", "/", Some(json!({"name": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Item name is required");

        let (status, body) = send("PUT", "/1", Some(json!({"priority": "P7"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Priority must be P1, P2, or P3");
    }

    #[tokio::test]
    async fn test_non_numeric_id_never_reaches_storage() {
        let (status, body) = send("GET", "/abc", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Item not found");

        let (status, _) = send("PUT", "/abc", Some(json!({"priority": "P1"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send("PUT", "/abc", Some(json!({"priority": "urgent"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Priority must be P1, P2, or P3");
    }

    #[test]
    fn test_openapi_lists_item_paths() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();
        let paths = json["paths"].as_object().unwrap();
        assert!(paths.contains_key("/{id}"));
        assert!(json["components"]["schemas"]["Item"].is_object());
    }
}
