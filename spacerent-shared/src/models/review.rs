/// Review model and database operations
///
/// A review is a rating and optional comment a user leaves for a space.
/// Reviews are append-only: they can be listed and created, never updated
/// or deleted. The rating is expected to be 1-5 but the range is not
/// enforced.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE reviews (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     user_id INTEGER NOT NULL REFERENCES users(id),
///     space_id INTEGER NOT NULL REFERENCES spaces(id),
///     rating INTEGER NOT NULL,
///     comment TEXT NOT NULL DEFAULT '',
///     created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
/// );
/// ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Review model representing a rating a user left for a space
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    /// Unique review ID (store-assigned, auto-incrementing)
    pub id: i64,

    /// User who wrote the review
    pub user_id: i64,

    /// Space being reviewed
    pub space_id: i64,

    /// Rating, expected 1-5
    pub rating: i64,

    /// Review text (empty string when not provided)
    pub comment: String,

    /// When the review was written
    pub created_at: NaiveDateTime,
}

/// Input for creating a new review
#[derive(Debug, Clone)]
pub struct CreateReview {
    /// User writing the review (must exist)
    pub user_id: i64,

    /// Space being reviewed (must exist)
    pub space_id: i64,

    /// Rating, expected 1-5
    pub rating: i64,

    /// Review text
    pub comment: String,
}

impl Review {
    /// Creates a new review
    pub async fn create(pool: &SqlitePool, data: CreateReview) -> Result<Self, sqlx::Error> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (user_id, space_id, rating, comment)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, space_id, rating, comment, created_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.space_id)
        .bind(data.rating)
        .bind(data.comment)
        .fetch_one(pool)
        .await?;

        Ok(review)
    }

    /// Lists all reviews in insertion order
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, user_id, space_id, rating, comment, created_at
            FROM reviews
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(reviews)
    }
}
