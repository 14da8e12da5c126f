/// Database connection pool management
///
/// This module provides a SQLite connection pool using sqlx. The store is a
/// single local file by default (`sqlite:spacerent.db?mode=rwc`), created on
/// first use; `DATABASE_URL` points it elsewhere in production.
///
/// WAL journal mode is enabled for concurrent readers, and foreign key
/// enforcement is switched on per database (SQLite defaults it to off).
///
/// # Example
///
/// ```no_run
/// use spacerent_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let config = DatabaseConfig {
///     url: "sqlite:spacerent.db?mode=rwc".to_string(),
///     ..Default::default()
/// };
///
/// let pool = create_pool(config).await?;
///
/// let row: (i64,) = sqlx::query_as("SELECT 1")
///     .fetch_one(&pool)
///     .await?;
/// # Ok(())
/// # }
/// ```

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Configuration for the database connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g., "sqlite:spacerent.db?mode=rwc")
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Timeout for acquiring a connection from the pool (seconds)
    pub connect_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 5,
            connect_timeout_seconds: 30,
        }
    }
}

/// Creates and initializes a SQLite connection pool
///
/// This function:
/// 1. Creates a pool with the specified configuration
/// 2. Enables WAL journal mode and foreign key enforcement
/// 3. Performs a health check to verify the store is usable
///
/// # Errors
///
/// Returns an error if the database URL is invalid, the file cannot be
/// opened, or the health check fails.
pub async fn create_pool(config: DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    info!(
        url = %config.url,
        max_connections = config.max_connections,
        "Creating database connection pool"
    );

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .connect(&config.url)
        .await?;

    // WAL allows readers to proceed while a write is in flight
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&pool)
        .await?;
    // SQLite ships with foreign keys off
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await?;

    health_check(&pool).await?;

    info!("Database connection pool created successfully");
    Ok(pool)
}

/// Performs a health check on the database connection
///
/// Executes a trivial query to verify the store is reachable and responding.
pub async fn health_check(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    debug!("Performing database health check");

    let result: (i32,) = sqlx::query_as("SELECT 1").fetch_one(pool).await?;

    if result.0 == 1 {
        debug!("Database health check passed");
        Ok(())
    } else {
        warn!(
            "Database health check returned unexpected value: {}",
            result.0
        );
        Err(sqlx::Error::Protocol(
            "Health check returned unexpected value".into(),
        ))
    }
}

/// Gracefully closes the connection pool
///
/// Called during shutdown so the WAL is checkpointed and file handles are
/// released.
pub async fn close_pool(pool: SqlitePool) {
    info!("Closing database connection pool");
    pool.close().await;
    info!("Database connection pool closed");
}
