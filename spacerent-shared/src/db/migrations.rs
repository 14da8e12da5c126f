/// Database migration runner
///
/// Migrations live in the `migrations/` directory at this crate's root and
/// are embedded into the binary at compile time, so a deployed server can
/// bring a fresh store up to date on startup without shipping SQL files.
///
/// # Example
///
/// ```no_run
/// use spacerent_shared::db::pool::{create_pool, DatabaseConfig};
/// use spacerent_shared::db::migrations::run_migrations;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DatabaseConfig {
///     url: "sqlite:spacerent.db?mode=rwc".to_string(),
///     ..Default::default()
/// };
/// let pool = create_pool(config).await?;
///
/// run_migrations(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::SqlitePool;
use tracing::{info, warn};

/// Runs all pending database migrations
///
/// # Errors
///
/// Returns an error if a migration fails to execute or the connection is
/// lost mid-run. A failed migration is rolled back.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("./migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}
