/// User endpoints
///
/// # Endpoints
///
/// - `GET /api/users` - List all users
/// - `POST /api/users` - Create a user
///
/// Responses never contain the password hash. An optional `password` on
/// create is hashed with Argon2id before storage; nothing authenticates
/// against it yet.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use spacerent_shared::auth::password::hash_password;
use spacerent_shared::models::user::{CreateUser, User};
use validator::Validate;

/// Create user request
///
/// Required fields are optional here so their absence reports a 400 naming
/// the field instead of a deserialization failure. Unknown fields are
/// ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Username (required, unique)
    pub username: Option<String>,

    /// Email address (required, unique)
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,

    /// Display name
    pub full_name: Option<String>,

    /// Profile picture URL
    pub profile_picture: Option<String>,

    /// Plaintext password, hashed before storage
    pub password: Option<String>,
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

/// Create a user
///
/// Required fields, checked in order: `username`, `email`. Duplicate
/// usernames or emails are a 409.
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    req.validate()?;

    let username = req
        .username
        .ok_or_else(|| ApiError::missing_field("username"))?;
    let email = req.email.ok_or_else(|| ApiError::missing_field("email"))?;

    let password_hash = match req.password.as_deref() {
        Some(password) => hash_password(password)?,
        None => String::new(),
    };

    let user = User::create(
        &state.db,
        CreateUser {
            username,
            email,
            full_name: req.full_name.unwrap_or_default(),
            profile_picture: req.profile_picture.unwrap_or_default(),
            password_hash,
        },
    )
    .await?;

    tracing::debug!(user_id = user.id, "Created user");

    Ok((StatusCode::CREATED, Json(user)))
}
