/// Database models for SpaceRent
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `user`: Accounts that list spaces, book them, and leave reviews
/// - `space`: Rentable listings with price, location, and capacity
/// - `booking`: Reservations of a space with a lifecycle status
/// - `review`: Ratings and comments a user leaves for a space
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
/// let new_user = CreateUser {
///     username: "ada".to_string(),
///     email: "ada@example.com".to_string(),
///     full_name: "Ada Lovelace".to_string(),
///     profile_picture: String::new(),
///     password_hash: String::new(),
/// };
///
/// let user = User::create(&pool, new_user).await?;
/// # Ok(())
/// # }
/// ```

pub mod booking;
pub mod review;
pub mod space;
pub mod user;
