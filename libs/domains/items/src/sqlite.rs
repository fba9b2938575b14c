use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::ItemResult,
    models::{Item, NewItem, Priority, UpdateOutcome},
    repository::ItemRepository,
};

pub struct SqliteItemRepository {
    db: DatabaseConnection,
}

impl SqliteItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Item::from).collect())
    }

    async fn create(&self, input: NewItem) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(item_id = model.id, priority = %model.priority, "Created item");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Item::from))
    }

    async fn update_priority(&self, id: i32, priority: Priority) -> ItemResult<UpdateOutcome> {
        let result = entity::Entity::update_many()
            .set(entity::ActiveModel {
                priority: Set(priority),
                ..Default::default()
            })
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(UpdateOutcome::NotFound);
        }

        tracing::info!(item_id = id, %priority, "Updated item priority");

        // Read back so the caller sees the stored row
        Ok(match self.get_by_id(id).await? {
            Some(item) => UpdateOutcome::Updated(item),
            None => UpdateOutcome::NotFound,
        })
    }
}
