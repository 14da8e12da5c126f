/// Database layer for SpaceRent
///
/// This module provides connection pooling, migrations, and demo data
/// seeding. Models live in the `models` module at crate root level.
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with health checks
/// - `migrations`: Database migration runner
/// - `seed`: Demo data inserted on first startup
///
/// # Example
///
/// ```no_run
/// use spacerent_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: "sqlite:spacerent.db?mode=rwc".to_string(),
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     Ok(())
/// }
/// ```

pub mod migrations;
pub mod pool;
pub mod seed;
