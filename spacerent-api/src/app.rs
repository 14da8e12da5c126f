/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use spacerent_api::{app::AppState, config::Config};
/// use spacerent_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     max_connections: config.database.max_connections,
///     ..Default::default()
/// })
/// .await?;
/// let state = AppState::new(pool, config);
/// let app = spacerent_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. The pool
/// handle carried here is the only route to the store; repositories never
/// cache entity state across requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /                          # API metadata
/// ├── GET  /health                    # Health check
/// └── /api/
///     ├── /spaces
///     │   ├── GET    /                # List spaces
///     │   ├── POST   /                # Create space
///     │   ├── GET    /:id             # Get space
///     │   ├── PUT    /:id             # Update space
///     │   └── DELETE /:id             # Delete space
///     ├── /users
///     │   ├── GET    /                # List users
///     │   └── POST   /                # Create user
///     ├── /bookings
///     │   ├── GET    /                # List bookings
///     │   ├── POST   /                # Create booking
///     │   ├── GET    /:id             # Get booking
///     │   ├── PUT    /:id             # Update booking
///     │   ├── POST   /:id/pay         # Pay for a booking
///     │   └── POST   /:id/cancel      # Cancel a booking
///     └── /reviews
///         ├── GET    /                # List reviews
///         └── POST   /                # Create review
/// ```
///
/// # Middleware Stack
///
/// 1. Request logging (tower-http TraceLayer)
/// 2. Permissive CORS, so a browser frontend can talk to the API directly
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let space_routes = Router::new()
        .route("/", get(routes::spaces::list_spaces))
        .route("/", post(routes::spaces::create_space))
        .route("/:id", get(routes::spaces::get_space))
        .route("/:id", put(routes::spaces::update_space))
        .route("/:id", delete(routes::spaces::delete_space));

    let user_routes = Router::new()
        .route("/", get(routes::users::list_users))
        .route("/", post(routes::users::create_user));

    let booking_routes = Router::new()
        .route("/", get(routes::bookings::list_bookings))
        .route("/", post(routes::bookings::create_booking))
        .route("/:id", get(routes::bookings::get_booking))
        .route("/:id", put(routes::bookings::update_booking))
        .route("/:id/pay", post(routes::bookings::pay_booking))
        .route("/:id/cancel", post(routes::bookings::cancel_booking));

    let review_routes = Router::new()
        .route("/", get(routes::reviews::list_reviews))
        .route("/", post(routes::reviews::create_review));

    let api_routes = Router::new()
        .nest("/spaces", space_routes)
        .nest("/users", user_routes)
        .nest("/bookings", booking_routes)
        .nest("/reviews", review_routes);

    Router::new()
        .route("/", get(routes::meta::api_index))
        .route("/health", get(routes::health::health_check))
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
