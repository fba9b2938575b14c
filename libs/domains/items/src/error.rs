use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub const NAME_REQUIRED: &str = "Item name is required";
pub const INVALID_PRIORITY: &str = "Priority must be P1, P2, or P3";
pub const ITEM_NOT_FOUND: &str = "Item not found";

#[derive(Debug, Error)]
pub enum ItemError {
    /// Input rejected before touching the store; the message is client-facing
    #[error("{0}")]
    Validation(String),

    #[error("Item not found: {0}")]
    NotFound(i32),

    /// Path id that cannot name any item
    #[error("Invalid item id: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl ItemError {
    pub fn name_required() -> Self {
        ItemError::Validation(NAME_REQUIRED.to_string())
    }

    pub fn invalid_priority() -> Self {
        ItemError::Validation(INVALID_PRIORITY.to_string())
    }

    /// Attach the operation that failed, which picks the 500 message.
    pub fn during(self, op: ItemOperation) -> ItemFailure {
        ItemFailure { op, error: self }
    }
}

impl From<sea_orm::DbErr> for ItemError {
    fn from(err: sea_orm::DbErr) -> Self {
        ItemError::Database(err.to_string())
    }
}

/// HTTP-level operation an error occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOperation {
    List,
    Get,
    Create,
    Update,
}

impl ItemOperation {
    /// Message returned with a 500
    pub fn failure_message(self) -> &'static str {
        match self {
            ItemOperation::List => "Failed to fetch items",
            ItemOperation::Get => "Failed to fetch item",
            ItemOperation::Create => "Failed to create item",
            ItemOperation::Update => "Failed to update item",
        }
    }
}

/// An [`ItemError`] tagged with the operation it came from
#[derive(Debug, Error)]
#[error("{op:?}: {error}")]
pub struct ItemFailure {
    pub op: ItemOperation,
    #[source]
    pub error: ItemError,
}

impl From<ItemFailure> for AppError {
    fn from(failure: ItemFailure) -> Self {
        match failure.error {
            ItemError::Validation(msg) => AppError::BadRequest(msg),
            ItemError::NotFound(_) | ItemError::InvalidId(_) => {
                AppError::NotFound(ITEM_NOT_FOUND.to_string())
            }
            ItemError::Database(detail) => {
                let message = failure.op.failure_message();
                tracing::error!(operation = ?failure.op, error = %detail, "{}", message);
                AppError::InternalServerError(message.to_string())
            }
        }
    }
}

impl IntoResponse for ItemFailure {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
