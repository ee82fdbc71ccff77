//! SQLite connection pool management

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::DomainError;

/// SQLite storage configuration
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Database file path, or `:memory:` for a private in-memory database
    pub path: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Use write-ahead logging
    pub enable_wal: bool,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            path: "TeamManager.db".to_string(),
            max_connections: 5,
            connect_timeout_secs: 30,
            enable_wal: true,
        }
    }
}

impl SqliteConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// A private in-memory database, held on a single connection
    pub fn in_memory() -> Self {
        Self {
            path: ":memory:".to_string(),
            max_connections: 1,
            connect_timeout_secs: 30,
            enable_wal: false,
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    fn url(&self) -> String {
        format!("sqlite:{}", self.path)
    }
}

impl From<&DatabaseConfig> for SqliteConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self::new(&config.path)
            .with_max_connections(config.max_connections)
            .with_connect_timeout(config.connect_timeout_secs)
    }
}

/// Open the connection pool, creating the database file if missing
pub async fn connect(config: &SqliteConfig) -> Result<SqlitePool, DomainError> {
    info!(path = %config.path, "Opening SQLite database");

    let mut options = SqliteConnectOptions::from_str(&config.url())
        .map_err(|e| DomainError::storage(format!("Invalid database path: {}", e)))?
        .create_if_missing(true);

    if config.enable_wal {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs));

    // An in-memory database lives only as long as its connection
    if config.is_in_memory() {
        pool_options = pool_options
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to open SQLite database: {}", e)))?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_config_default() {
        let config = SqliteConfig::default();

        assert_eq!(config.path, "TeamManager.db");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.connect_timeout_secs, 30);
        assert!(config.enable_wal);
        assert!(!config.is_in_memory());
    }

    #[test]
    fn test_sqlite_config_builder() {
        let config = SqliteConfig::new("teams.db")
            .with_max_connections(2)
            .with_connect_timeout(5);

        assert_eq!(config.url(), "sqlite:teams.db");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.connect_timeout_secs, 5);
    }

    #[test]
    fn test_sqlite_config_from_database_config() {
        let database = DatabaseConfig {
            path: "other.db".to_string(),
            max_connections: 3,
            connect_timeout_secs: 10,
        };

        let config = SqliteConfig::from(&database);
        assert_eq!(config.path, "other.db");
        assert_eq!(config.max_connections, 3);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[tokio::test]
    async fn test_connect_in_memory() {
        let pool = connect(&SqliteConfig::in_memory()).await.unwrap();
        let one: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(one, 1);
    }
}
