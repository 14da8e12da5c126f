/// Common test utilities for integration tests
///
/// Provides a `TestContext` holding a fully wired router over a fresh
/// in-memory SQLite store, plus request helpers that drive the router as a
/// tower `Service` and hand back the status code and parsed JSON body.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use spacerent_api::app::{build_router, AppState};
use spacerent_api::config::{ApiConfig, Config, DatabaseConfig};
use spacerent_shared::db::migrations::run_migrations;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::Service as _;

/// Test context containing the store and the router under test
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context with a fresh in-memory database
    ///
    /// The pool is capped at one connection: `sqlite::memory:` opens an
    /// independent database per connection.
    pub async fn new() -> anyhow::Result<Self> {
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        sqlx::query("PRAGMA foreign_keys = ON").execute(&db).await?;

        run_migrations(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        };

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }

    /// Sends a request and returns the status code and parsed JSON body
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(match body {
                Some(json) => Body::from(json.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let mut app = self.app.clone();
        let response = app.call(request).await.unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|e| panic!("non-JSON body for {} {}: {}", method, path, e));

        (status, json)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.request("GET", path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, Value) {
        self.request("DELETE", path, None).await
    }
}

/// Creates a user through the API and returns its id
pub async fn create_test_user(ctx: &TestContext, n: u32) -> i64 {
    let (status, body) = ctx
        .post(
            "/api/users",
            serde_json::json!({
                "username": format!("guest{}", n),
                "email": format!("guest{}@example.com", n),
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "user creation failed: {}", body);
    body["id"].as_i64().unwrap()
}

/// Creates a space through the API and returns its id
pub async fn create_test_space(ctx: &TestContext) -> i64 {
    let (status, body) = ctx
        .post(
            "/api/spaces",
            serde_json::json!({
                "title": "Loft",
                "description": "x",
                "price_per_night": 100.0,
                "location": "LA",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "space creation failed: {}", body);
    body["id"].as_i64().unwrap()
}

/// Creates a pending booking through the API and returns its id
pub async fn create_test_booking(ctx: &TestContext, user_id: i64, space_id: i64) -> i64 {
    let (status, body) = ctx
        .post(
            "/api/bookings",
            serde_json::json!({
                "user_id": user_id,
                "space_id": space_id,
                "check_in_date": "2025-06-01",
                "check_out_date": "2025-06-05",
                "total_price": 480.0,
            }),
        )
        .await;
    assert_eq!(
        status,
        StatusCode::CREATED,
        "booking creation failed: {}",
        body
    );
    body["id"].as_i64().unwrap()
}
