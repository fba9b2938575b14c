//! Request field checks
//!
//! These run before any storage call and never touch I/O.

use serde_json::Value;
use std::str::FromStr;

use crate::error::{ItemError, ItemResult};
use crate::models::Priority;

/// Accept a name that is a string with at least one non-whitespace character.
///
/// The name is returned as sent; surrounding whitespace is kept.
pub fn validate_name(name: Option<&Value>) -> ItemResult<String> {
    match name {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(ItemError::name_required()),
    }
}

/// Priority for a new item: absent or `null` falls back to P3.
pub fn resolve_priority(priority: Option<&Value>) -> ItemResult<Priority> {
    match priority {
        None | Some(Value::Null) => Ok(Priority::default()),
        Some(value) => parse_priority(value),
    }
}

/// Priority for an update, where a value must be present.
pub fn require_priority(priority: Option<&Value>) -> ItemResult<Priority> {
    match priority {
        None | Some(Value::Null) => Err(ItemError::invalid_priority()),
        Some(value) => parse_priority(value),
    }
}

fn parse_priority(value: &Value) -> ItemResult<Priority> {
    value
        .as_str()
        .and_then(|s| Priority::from_str(s).ok())
        .ok_or_else(ItemError::invalid_priority)
}

/// Parse the `{id}` path segment.
pub fn parse_item_id(raw: &str) -> ItemResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| ItemError::InvalidId(raw.to_string()))
}
