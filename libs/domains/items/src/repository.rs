use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{Item, NewItem, Priority, UpdateOutcome};

/// Repository trait for Item persistence
///
/// Inputs arrive already validated; implementations only map storage
/// failures to `ItemError::Database`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items, newest first
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Insert an item and return it with its assigned id and timestamp
    async fn create(&self, input: NewItem) -> ItemResult<Item>;

    /// Get an item by ID
    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>>;

    /// Change the priority of one item
    async fn update_priority(&self, id: i32, priority: Priority) -> ItemResult<UpdateOutcome>;
}
