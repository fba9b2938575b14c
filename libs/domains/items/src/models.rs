use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};
use ts_rs::TS;
use utoipa::ToSchema;

/// Item priority, P1 being the most urgent
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
    TS,
)]
#[ts(export)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Priority {
    #[sea_orm(string_value = "P1")]
    P1,
    #[sea_orm(string_value = "P2")]
    P2,
    /// Assigned when an item is created without a priority
    #[default]
    #[sea_orm(string_value = "P3")]
    P3,
}

/// A stored item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct Item {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Buy milk")]
    pub name: String,
    pub priority: Priority,
    /// Creation timestamp (RFC 3339)
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Validated input for inserting an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub priority: Priority,
}

/// Result of a priority update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A row changed; holds the item as read back after the update
    Updated(Item),
    /// No item has the requested id
    NotFound,
}

/// Body of `POST /items`
///
/// Fields stay as raw JSON so that wrong types produce the same messages as
/// missing values instead of a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    #[schema(value_type = String, example = "Buy milk")]
    pub name: Option<Value>,
    /// Defaults to P3 when absent or null
    #[schema(value_type = Option<Priority>)]
    pub priority: Option<Value>,
}

/// Body of `PUT /items/{id}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct UpdatePriorityRequest {
    #[schema(value_type = Priority)]
    pub priority: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_priority_default_is_p3() {
        assert_eq!(Priority::default(), Priority::P3);
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::P1.to_string(), "P1");
        assert_eq!(Priority::from_str("P2").unwrap(), Priority::P2);
        assert!(Priority::from_str("p2").is_err());
        assert_eq!(serde_json::to_value(Priority::P3).unwrap(), "P3");
    }

    #[test]
    fn test_item_json_shape() {
        let item = Item {
            id: 4,
            name: "Buy milk".to_string(),
            priority: Priority::P1,
            created_at: DateTime::parse_from_rfc3339("2025-01-02T03:04:05Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({
                "id": 4,
                "name": "Buy milk",
                "priority": "P1",
                "created_at": "2025-01-02T03:04:05Z"
            })
        );
    }

    #[test]
    fn test_create_request_null_fields_are_absent() {
        let req: CreateItemRequest =
            serde_json::from_value(serde_json::json!({"name": null, "priority": null})).unwrap();
        assert_eq!(req, CreateItemRequest::default());
    }

    #[test]
    fn test_create_request_keeps_wrong_types() {
        let req: CreateItemRequest =
            serde_json::from_value(serde_json::json!({"name": 42, "extra": true})).unwrap();
        assert_eq!(req.name, Some(serde_json::json!(42)));
        assert_eq!(req.priority, None);
    }
}
