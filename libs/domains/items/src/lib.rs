//! Items Domain
//!
//! A prioritised task list stored in SQLite through sea-orm.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, operation-specific error messages
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation (pure functions in `validation`)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SQLite implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, Priority, request bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, ItemService, SqliteItemRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = database::sqlite::connect(database::sqlite::MEMORY_URL).await?;
//!
//! let repository = SqliteItemRepository::new(db);
//! let service = ItemService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;
pub mod validation;

// Re-export commonly used types
pub use entity::ApiResource;
pub use error::{ItemError, ItemFailure, ItemOperation, ItemResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateItemRequest, Item, NewItem, Priority, UpdateOutcome, UpdatePriorityRequest,
};
pub use repository::ItemRepository;
pub use service::ItemService;
pub use sqlite::SqliteItemRepository;
