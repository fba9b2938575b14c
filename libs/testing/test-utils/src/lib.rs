//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: migrated in-memory SQLite database (feature: "sqlite")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_sqlite_test() {
//!     let db = TestDatabase::empty().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let item_name = builder.item_name("main");
//! }
//! ```

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::TestDatabase;

const PRIORITY_LABELS: [&str; 3] = ["P1", "P2", "P3"];

/// Builder for test data with deterministic randomization
///
/// The same seed always yields the same names and priorities, so failures
/// are reproducible.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_item");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("item", "main"), "test-item-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Item name unique to this builder
    pub fn item_name(&self, suffix: &str) -> String {
        self.name("item", suffix)
    }

    /// A valid priority label ("P1", "P2" or "P3"), chosen by seed and `offset`
    pub fn priority_label(&self, offset: u64) -> &'static str {
        let index = self.seed.wrapping_add(offset) % PRIORITY_LABELS.len() as u64;
        PRIORITY_LABELS[index as usize]
    }
}

/// Test assertion helpers
pub mod assertions {
    use serde_json::Value;

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a JSON body is exactly `{"error": expected}`
    pub fn assert_error_body(body: &Value, expected: &str) {
        assert_eq!(
            body,
            &serde_json::json!({ "error": expected }),
            "expected error body with message {:?}",
            expected
        );
    }
}
