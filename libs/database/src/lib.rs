//! Database library providing the SQLite connector and helpers
//!
//! # Features
//!
//! - `sqlite` (default) - SQLite support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::sqlite;
//! use migration::Migrator;
//!
//! let db = sqlite::connect("sqlite::memory:").await?;
//! sqlite::run_migrations::<Migrator>(&db, "priority_list_api").await?;
//! ```

pub mod common;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use common::{DatabaseError, DatabaseResult};
