#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or};

/// URL of a private in-memory database.
pub const MEMORY_URL: &str = "sqlite::memory:";

/// SQLite connection settings
///
/// ```ignore
/// use database::sqlite::SqliteConfig;
///
/// let config = SqliteConfig::memory();
/// let config = SqliteConfig::new("sqlite://data/items.db?mode=rwc");
///
/// // From environment variables (requires `config` feature)
/// let config = SqliteConfig::from_env()?;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SqliteConfig {
    /// Database URL, e.g. `sqlite::memory:` or `sqlite://items.db`
    pub url: String,

    /// Upper bound on pooled connections (ignored for in-memory databases)
    pub max_connections: u32,

    /// Log every SQL statement at debug level
    pub sqlx_logging: bool,
}

impl SqliteConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Private in-memory database that lives as long as the pool.
    pub fn memory() -> Self {
        Self::new(MEMORY_URL)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the URL names an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Pool size actually used.
    ///
    /// Every connection to an in-memory database sees its own empty database,
    /// so those are pinned to a single connection.
    pub fn pool_size(&self) -> u32 {
        if self.is_memory() {
            1
        } else {
            self.max_connections.max(1)
        }
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            url: MEMORY_URL.to_string(),
            max_connections: 5,
            sqlx_logging: true,
        }
    }
}

/// Load SqliteConfig from environment variables
///
/// - `DATABASE_URL` (optional, default: `sqlite::memory:`)
/// - `DB_MAX_CONNECTIONS` (optional, default: 5)
/// - `DB_SQLX_LOGGING` (optional, default: true)
#[cfg(feature = "config")]
impl FromEnv for SqliteConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_or_default("DATABASE_URL", MEMORY_URL);
        let max_connections = env_parse_or("DB_MAX_CONNECTIONS", 5u32)?;
        let sqlx_logging = env_parse_or("DB_SQLX_LOGGING", true)?;

        Ok(Self {
            url,
            max_connections,
            sqlx_logging,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_memory() {
        let config = SqliteConfig::default();
        assert_eq!(config.url(), "sqlite::memory:");
        assert!(config.is_memory());
        assert_eq!(config.pool_size(), 1);
    }

    #[test]
    fn test_shared_memory_url_is_memory() {
        let config = SqliteConfig::new("sqlite:file:items?mode=memory&cache=shared");
        assert!(config.is_memory());
        assert_eq!(config.pool_size(), 1);
    }

    #[test]
    fn test_file_database_uses_configured_pool() {
        let mut config = SqliteConfig::new("sqlite://items.db?mode=rwc");
        config.max_connections = 8;
        assert!(!config.is_memory());
        assert_eq!(config.pool_size(), 8);

        config.max_connections = 0;
        assert_eq!(config.pool_size(), 1);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", None::<&str>),
                ("DB_MAX_CONNECTIONS", None::<&str>),
                ("DB_SQLX_LOGGING", None::<&str>),
            ],
            || {
                let config = SqliteConfig::from_env().unwrap();
                assert_eq!(config, SqliteConfig::memory());
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_custom() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("sqlite://items.db")),
                ("DB_MAX_CONNECTIONS", Some("3")),
                ("DB_SQLX_LOGGING", Some("false")),
            ],
            || {
                let config = SqliteConfig::from_env().unwrap();
                assert_eq!(config.url, "sqlite://items.db");
                assert_eq!(config.max_connections, 3);
                assert!(!config.sqlx_logging);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_invalid_flag() {
        temp_env::with_var("DB_SQLX_LOGGING", Some("sometimes"), || {
            let err = SqliteConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DB_SQLX_LOGGING"));
        });
    }
}
