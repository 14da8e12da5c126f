/// User model and database operations
///
/// Users list spaces, book them, and leave reviews. Bookings and reviews
/// reference users by id; there is no live back-pointer from a user to its
/// bookings or reviews; navigation is a query against those tables.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT NOT NULL UNIQUE,
///     email TEXT NOT NULL UNIQUE,
///     full_name TEXT NOT NULL DEFAULT '',
///     profile_picture TEXT NOT NULL DEFAULT '',
///     password_hash TEXT NOT NULL DEFAULT '',
///     created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use spacerent_shared::models::user::{CreateUser, User};
/// use spacerent_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(&pool, CreateUser {
///     username: "ada".to_string(),
///     email: "ada@example.com".to_string(),
///     full_name: "Ada Lovelace".to_string(),
///     profile_picture: String::new(),
///     password_hash: String::new(),
/// }).await?;
///
/// println!("Created user {}", user.id);
/// # Ok(())
/// # }
/// ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User model representing an account
///
/// `password_hash` is write-only: it is stored for a future authentication
/// flow but never leaves the server in a response.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (store-assigned, auto-incrementing)
    pub id: i64,

    /// Username, unique across all users
    pub username: String,

    /// Email address, unique across all users
    pub email: String,

    /// Display name (empty string when not provided)
    pub full_name: String,

    /// Profile picture URL (empty string when not provided)
    pub profile_picture: String,

    /// Argon2id password hash, or empty string when no password was set
    ///
    /// Never serialized into responses.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When the account was created
    pub created_at: NaiveDateTime,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Username (required, unique)
    pub username: String,

    /// Email address (required, unique)
    pub email: String,

    /// Display name
    pub full_name: String,

    /// Profile picture URL
    pub profile_picture: String,

    /// Argon2id password hash, empty when no password was supplied
    pub password_hash: String,
}

impl User {
    /// Creates a new user
    ///
    /// # Errors
    ///
    /// Returns an error if the username or email is already taken (unique
    /// constraint violation) or the database operation fails.
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, full_name, profile_picture, password_hash)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, username, email, full_name, profile_picture, password_hash, created_at
            "#,
        )
        .bind(data.username)
        .bind(data.email)
        .bind(data.full_name)
        .bind(data.profile_picture)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, full_name, profile_picture, password_hash, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists all users in insertion order
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, full_name, profile_picture, password_hash, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_user() -> User {
        User {
            id: 1,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            full_name: "Ada Lovelace".to_string(),
            profile_picture: String::new(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let json = serde_json::to_string(&sample_user()).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("secret"));
    }

    #[test]
    fn test_projection_includes_public_fields() {
        let value: serde_json::Value =
            serde_json::to_value(sample_user()).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["username"], "ada");
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["full_name"], "Ada Lovelace");
        assert_eq!(value["profile_picture"], "");
    }
}
