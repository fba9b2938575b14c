use crate::models::{Item, NewItem, Priority};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// Route and OpenAPI metadata for an entity exposed over HTTP
pub trait ApiResource {
    /// OpenAPI tag
    const TAG: &'static str;
    /// Mount path relative to `/api`
    const URL: &'static str;
}

/// Sea-ORM Entity for the items table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub priority: Priority,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ApiResource for Model {
    const TAG: &'static str = "Items";
    const URL: &'static str = "/items";
}

impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            priority: model.priority,
            created_at: model.created_at,
        }
    }
}

impl From<NewItem> for ActiveModel {
    fn from(input: NewItem) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            priority: Set(input.priority),
            created_at: Set(chrono::Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_leaves_id_to_the_store() {
        let active: ActiveModel = NewItem {
            name: "Buy milk".to_string(),
            priority: Priority::P2,
        }
        .into();

        assert_eq!(active.id, NotSet);
        assert_eq!(active.name, Set("Buy milk".to_string()));
        assert_eq!(active.priority, Set(Priority::P2));
        assert!(active.created_at.is_set());
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(<Model as ApiResource>::URL, "/items");
        assert_eq!(<Model as ApiResource>::TAG, "Items");
    }
}
