//! Database connection pool management.

use ecole_config::DatabaseConfig;
use ecole_core::{EcoleError, EcoleResult};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// Database engine a pool talks to, derived from the URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    MySql,
    Sqlite,
}

impl DatabaseBackend {
    /// Picks the backend for a connection URL.
    pub fn from_url(url: &str) -> EcoleResult<Self> {
        if url.starts_with("mysql:") || url.starts_with("mariadb:") {
            Ok(Self::MySql)
        } else if url.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else {
            Err(EcoleError::configuration(format!(
                "Unsupported database URL: {}",
                url.split(':').next().unwrap_or_default()
            )))
        }
    }
}

impl fmt::Display for DatabaseBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MySql => write!(f, "mysql"),
            Self::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Database pool wrapper.
///
/// Cloning is cheap: both variants are reference-counted sqlx pools.
#[derive(Clone)]
pub enum DatabasePool {
    MySql(MySqlPool),
    Sqlite(SqlitePool),
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    ///
    /// Alias: [`connect`](Self::connect)
    pub async fn new(config: &DatabaseConfig) -> EcoleResult<Self> {
        let backend = DatabaseBackend::from_url(&config.url)?;
        info!("Connecting to {} database...", backend);

        let pool = match backend {
            DatabaseBackend::MySql => Self::MySql(Self::connect_mysql(config).await?),
            DatabaseBackend::Sqlite => Self::Sqlite(Self::connect_sqlite(config).await?),
        };

        info!("{} connection pool established", backend);
        Ok(pool)
    }

    /// Creates a new database pool from configuration.
    ///
    /// This is an alias for [`new`](Self::new).
    pub async fn connect(config: &DatabaseConfig) -> EcoleResult<Self> {
        Self::new(config).await
    }

    async fn connect_mysql(config: &DatabaseConfig) -> EcoleResult<MySqlPool> {
        let mut options = MySqlConnectOptions::from_str(&config.url).map_err(connect_error)?;
        if !config.log_queries {
            options = options.disable_statement_logging();
        }

        MySqlPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect_with(options)
            .await
            .map_err(connect_error)
    }

    async fn connect_sqlite(config: &DatabaseConfig) -> EcoleResult<SqlitePool> {
        let mut options = SqliteConnectOptions::from_str(&config.url)
            .map_err(connect_error)?
            .create_if_missing(true);
        if !config.log_queries {
            options = options.disable_statement_logging();
        }

        // Every connection to `:memory:` opens its own database, so the pool
        // is pinned to one connection that is never recycled.
        let pool_options = if config.is_in_memory() {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .min_connections(config.min_connections)
                .max_connections(config.max_connections)
                .idle_timeout(Some(config.idle_timeout()))
        };

        pool_options
            .acquire_timeout(config.connect_timeout())
            .connect_with(options)
            .await
            .map_err(connect_error)
    }

    /// Returns the backend of this pool.
    #[must_use]
    pub const fn backend(&self) -> DatabaseBackend {
        match self {
            Self::MySql(_) => DatabaseBackend::MySql,
            Self::Sqlite(_) => DatabaseBackend::Sqlite,
        }
    }

    /// Returns the MySQL pool, if this is one.
    #[must_use]
    pub const fn as_mysql(&self) -> Option<&MySqlPool> {
        match self {
            Self::MySql(pool) => Some(pool),
            Self::Sqlite(_) => None,
        }
    }

    /// Returns the SQLite pool, if this is one.
    #[must_use]
    pub const fn as_sqlite(&self) -> Option<&SqlitePool> {
        match self {
            Self::Sqlite(pool) => Some(pool),
            Self::MySql(_) => None,
        }
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> EcoleResult<()> {
        let result = match self {
            Self::MySql(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
            Self::Sqlite(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
        };
        result.map_err(|e| EcoleError::Database(format!("Health check failed: {}", e)))
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing {} connection pool...", self.backend());
        match self {
            Self::MySql(pool) => pool.close().await,
            Self::Sqlite(pool) => pool.close().await,
        }
        info!("Database connection pool closed");
    }

    /// Returns true once [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match self {
            Self::MySql(pool) => pool.is_closed(),
            Self::Sqlite(pool) => pool.is_closed(),
        }
    }
}

fn connect_error(e: sqlx::Error) -> EcoleError {
    warn!("Failed to connect to database: {}", e);
    EcoleError::Database(format!("Failed to connect: {}", e))
}

impl From<MySqlPool> for DatabasePool {
    fn from(pool: MySqlPool) -> Self {
        Self::MySql(pool)
    }
}

impl From<SqlitePool> for DatabasePool {
    fn from(pool: SqlitePool) -> Self {
        Self::Sqlite(pool)
    }
}

impl fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (size, num_idle) = match self {
            Self::MySql(pool) => (pool.size(), pool.num_idle()),
            Self::Sqlite(pool) => (pool.size(), pool.num_idle()),
        };
        f.debug_struct("DatabasePool")
            .field("backend", &self.backend())
            .field("size", &size)
            .field("num_idle", &num_idle)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_url() {
        assert_eq!(
            DatabaseBackend::from_url("mysql://u:p@localhost/ecole").unwrap(),
            DatabaseBackend::MySql
        );
        assert_eq!(
            DatabaseBackend::from_url("mariadb://localhost/ecole").unwrap(),
            DatabaseBackend::MySql
        );
        assert_eq!(DatabaseBackend::from_url("sqlite::memory:").unwrap(), DatabaseBackend::Sqlite);
        assert_eq!(DatabaseBackend::from_url("sqlite://ecole.db").unwrap(), DatabaseBackend::Sqlite);
    }

    #[test]
    fn test_unsupported_backend() {
        let err = DatabaseBackend::from_url("postgres://localhost/ecole").unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        assert!(err.to_string().contains("postgres"));
    }

    #[tokio::test]
    async fn test_in_memory_pool_lifecycle() {
        let pool = DatabasePool::new(&DatabaseConfig::in_memory()).await.unwrap();
        assert_eq!(pool.backend(), DatabaseBackend::Sqlite);
        assert!(pool.as_sqlite().is_some());
        assert!(pool.as_mysql().is_none());
        pool.health_check().await.unwrap();

        pool.close().await;
        assert!(pool.is_closed());
        assert!(pool.health_check().await.is_err());
    }
}
