//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItemRequest, Item, NewItem, UpdateOutcome, UpdatePriorityRequest};
use crate::repository::ItemRepository;
use crate::validation::{require_priority, resolve_priority, validate_name};

/// Item service providing business logic operations
///
/// Holds no state besides the injected repository; every request is
/// validated here before the repository is called.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all items, newest first
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    /// Create a new item
    ///
    /// The name is checked before the priority, so a request with both
    /// fields invalid reports the name.
    #[instrument(skip(self, input))]
    pub async fn create_item(&self, input: CreateItemRequest) -> ItemResult<Item> {
        let name = validate_name(input.name.as_ref())?;
        let priority = resolve_priority(input.priority.as_ref())?;

        self.repository.create(NewItem { name, priority }).await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i32) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Set the priority of an existing item
    #[instrument(skip(self, input))]
    pub async fn update_priority(&self, id: i32, input: UpdatePriorityRequest) -> ItemResult<Item> {
        let priority = require_priority(input.priority.as_ref())?;

        match self.repository.update_priority(id, priority).await? {
            UpdateOutcome::Updated(item) => Ok(item),
            UpdateOutcome::NotFound => Err(ItemError::NotFound(id)),
        }
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
