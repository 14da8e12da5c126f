/// Space model and database operations
///
/// A space is a rentable listing with a price, a location, and a capacity.
/// Spaces are the only entity with a full CRUD surface: they can be updated
/// and deleted after creation.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE spaces (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     title TEXT NOT NULL,
///     description TEXT NOT NULL,
///     price_per_night REAL NOT NULL,
///     location TEXT NOT NULL,
///     latitude REAL,
///     longitude REAL,
///     capacity INTEGER NOT NULL DEFAULT 2,
///     amenities TEXT NOT NULL DEFAULT '',
///     image_url TEXT NOT NULL DEFAULT '',
///     created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
///     updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use spacerent_shared::models::space::{CreateSpace, Space};
/// use spacerent_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let space = Space::create(&pool, CreateSpace {
///     title: "Cozy Downtown Loft".to_string(),
///     description: "Bright open-plan loft".to_string(),
///     price_per_night: 120.0,
///     location: "Los Angeles, CA".to_string(),
///     latitude: None,
///     longitude: None,
///     capacity: 2,
///     amenities: String::new(),
///     image_url: String::new(),
/// }).await?;
///
/// println!("Listed space {}", space.id);
/// # Ok(())
/// # }
/// ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Space model representing a rentable listing
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Space {
    /// Unique space ID (store-assigned, auto-incrementing)
    pub id: i64,

    /// Listing title
    pub title: String,

    /// Listing description
    pub description: String,

    /// Nightly price
    pub price_per_night: f64,

    /// Address or area description
    pub location: String,

    /// Latitude of the listing, if geocoded
    pub latitude: Option<f64>,

    /// Longitude of the listing, if geocoded
    pub longitude: Option<f64>,

    /// Maximum number of guests
    pub capacity: i64,

    /// Free-text amenities list (empty string when not provided)
    pub amenities: String,

    /// Cover image URL (empty string when not provided)
    pub image_url: String,

    /// When the listing was created
    pub created_at: NaiveDateTime,

    /// When the listing was last updated
    pub updated_at: NaiveDateTime,
}

/// Input for creating a new space
#[derive(Debug, Clone)]
pub struct CreateSpace {
    /// Listing title (required)
    pub title: String,

    /// Listing description (required)
    pub description: String,

    /// Nightly price (required, positive)
    pub price_per_night: f64,

    /// Address or area description (required)
    pub location: String,

    /// Latitude, if known
    pub latitude: Option<f64>,

    /// Longitude, if known
    pub longitude: Option<f64>,

    /// Maximum number of guests
    pub capacity: i64,

    /// Free-text amenities list
    pub amenities: String,

    /// Cover image URL
    pub image_url: String,
}

/// Input for updating an existing space
///
/// All fields are optional. Only `Some` fields are written; `None` leaves
/// the current value untouched. There is no way to clear a field through
/// this path.
#[derive(Debug, Clone, Default)]
pub struct UpdateSpace {
    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New nightly price
    pub price_per_night: Option<f64>,

    /// New location
    pub location: Option<String>,

    /// New latitude
    pub latitude: Option<f64>,

    /// New longitude
    pub longitude: Option<f64>,

    /// New capacity
    pub capacity: Option<i64>,

    /// New amenities list
    pub amenities: Option<String>,

    /// New cover image URL
    pub image_url: Option<String>,
}

const SPACE_COLUMNS: &str = "id, title, description, price_per_night, location, latitude, \
                             longitude, capacity, amenities, image_url, created_at, updated_at";

impl Space {
    /// Creates a new space listing
    pub async fn create(pool: &SqlitePool, data: CreateSpace) -> Result<Self, sqlx::Error> {
        let space = sqlx::query_as::<_, Space>(&format!(
            r#"
            INSERT INTO spaces (title, description, price_per_night, location,
                                latitude, longitude, capacity, amenities, image_url)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {SPACE_COLUMNS}
            "#,
        ))
        .bind(data.title)
        .bind(data.description)
        .bind(data.price_per_night)
        .bind(data.location)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(data.capacity)
        .bind(data.amenities)
        .bind(data.image_url)
        .fetch_one(pool)
        .await?;

        Ok(space)
    }

    /// Finds a space by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let space = sqlx::query_as::<_, Space>(&format!(
            "SELECT {SPACE_COLUMNS} FROM spaces WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(space)
    }

    /// Lists all spaces in insertion order
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let spaces = sqlx::query_as::<_, Space>(&format!(
            "SELECT {SPACE_COLUMNS} FROM spaces ORDER BY id"
        ))
        .fetch_all(pool)
        .await?;

        Ok(spaces)
    }

    /// Applies a partial update to a space
    ///
    /// Only fields present in `data` are written. Returns `None` if no space
    /// with the given id exists.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateSpace,
    ) -> Result<Option<Self>, sqlx::Error> {
        let mut query = String::from("UPDATE spaces SET updated_at = CURRENT_TIMESTAMP");

        if data.title.is_some() {
            query.push_str(", title = ?");
        }
        if data.description.is_some() {
            query.push_str(", description = ?");
        }
        if data.price_per_night.is_some() {
            query.push_str(", price_per_night = ?");
        }
        if data.location.is_some() {
            query.push_str(", location = ?");
        }
        if data.latitude.is_some() {
            query.push_str(", latitude = ?");
        }
        if data.longitude.is_some() {
            query.push_str(", longitude = ?");
        }
        if data.capacity.is_some() {
            query.push_str(", capacity = ?");
        }
        if data.amenities.is_some() {
            query.push_str(", amenities = ?");
        }
        if data.image_url.is_some() {
            query.push_str(", image_url = ?");
        }

        query.push_str(&format!(" WHERE id = ? RETURNING {SPACE_COLUMNS}"));

        let mut q = sqlx::query_as::<_, Space>(&query);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(price_per_night) = data.price_per_night {
            q = q.bind(price_per_night);
        }
        if let Some(location) = data.location {
            q = q.bind(location);
        }
        if let Some(latitude) = data.latitude {
            q = q.bind(latitude);
        }
        if let Some(longitude) = data.longitude {
            q = q.bind(longitude);
        }
        if let Some(capacity) = data.capacity {
            q = q.bind(capacity);
        }
        if let Some(amenities) = data.amenities {
            q = q.bind(amenities);
        }
        if let Some(image_url) = data.image_url {
            q = q.bind(image_url);
        }

        let space = q.bind(id).fetch_optional(pool).await?;

        Ok(space)
    }

    /// Deletes a space
    ///
    /// Returns `false` if no space with the given id exists. Fails with a
    /// foreign key constraint error if bookings or reviews still reference
    /// the space.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM spaces WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns whether any bookings or reviews reference this space
    pub async fn has_dependents(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT (SELECT COUNT(*) FROM bookings WHERE space_id = ?)
                 + (SELECT COUNT(*) FROM reviews WHERE space_id = ?)
            "#,
        )
        .bind(id)
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(count > 0)
    }
}
