/// Space endpoints
///
/// Spaces are the only resource with a full CRUD surface.
///
/// # Endpoints
///
/// - `GET /api/spaces` - List all spaces
/// - `GET /api/spaces/:id` - Get one space
/// - `POST /api/spaces` - Create a space
/// - `PUT /api/spaces/:id` - Partially update a space
/// - `DELETE /api/spaces/:id` - Delete a space (rejected while bookings or
///   reviews still reference it)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use spacerent_shared::models::space::{CreateSpace, Space, UpdateSpace};
use validator::Validate;

/// Create space request
///
/// Required fields are optional here so their absence reports a 400 naming
/// the field instead of a deserialization failure. Unknown fields are
/// ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSpaceRequest {
    /// Listing title (required)
    pub title: Option<String>,

    /// Listing description (required)
    pub description: Option<String>,

    /// Nightly price (required, positive)
    #[validate(range(exclusive_min = 0.0, message = "price_per_night must be positive"))]
    pub price_per_night: Option<f64>,

    /// Address or area description (required)
    pub location: Option<String>,

    /// Latitude, if known
    pub latitude: Option<f64>,

    /// Longitude, if known
    pub longitude: Option<f64>,

    /// Maximum number of guests (default 2)
    pub capacity: Option<i64>,

    /// Free-text amenities list (default "")
    pub amenities: Option<String>,

    /// Cover image URL (default "")
    pub image_url: Option<String>,
}

/// Update space request - any subset of fields
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSpaceRequest {
    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New nightly price
    #[validate(range(exclusive_min = 0.0, message = "price_per_night must be positive"))]
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

/// List all spaces
pub async fn list_spaces(State(state): State<AppState>) -> ApiResult<Json<Vec<Space>>> {
    let spaces = Space::list(&state.db).await?;
    Ok(Json(spaces))
}

/// Get one space by id
pub async fn get_space(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Space>> {
    let space = Space::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Space {} not found", id)))?;

    Ok(Json(space))
}

/// Create a space
///
/// Required fields, checked in order: `title`, `description`,
/// `price_per_night`, `location`.
pub async fn create_space(
    State(state): State<AppState>,
    Json(req): Json<CreateSpaceRequest>,
) -> ApiResult<(StatusCode, Json<Space>)> {
    req.validate()?;

    let title = req.title.ok_or_else(|| ApiError::missing_field("title"))?;
    let description = req
        .description
        .ok_or_else(|| ApiError::missing_field("description"))?;
    let price_per_night = req
        .price_per_night
        .ok_or_else(|| ApiError::missing_field("price_per_night"))?;
    let location = req
        .location
        .ok_or_else(|| ApiError::missing_field("location"))?;

    let space = Space::create(
        &state.db,
        CreateSpace {
            title,
            description,
            price_per_night,
            location,
            latitude: req.latitude,
            longitude: req.longitude,
            capacity: req.capacity.unwrap_or(2),
            amenities: req.amenities.unwrap_or_default(),
            image_url: req.image_url.unwrap_or_default(),
        },
    )
    .await?;

    tracing::debug!(space_id = space.id, "Created space");

    Ok((StatusCode::CREATED, Json(space)))
}

/// Partially update a space
///
/// Only fields present in the body are written; everything else keeps its
/// current value.
pub async fn update_space(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateSpaceRequest>,
) -> ApiResult<Json<Space>> {
    req.validate()?;

    let space = Space::update(
        &state.db,
        id,
        UpdateSpace {
            title: req.title,
            description: req.description,
            price_per_night: req.price_per_night,
            location: req.location,
            latitude: req.latitude,
            longitude: req.longitude,
            capacity: req.capacity,
            amenities: req.amenities,
            image_url: req.image_url,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("Space {} not found", id)))?;

    Ok(Json(space))
}

/// Delete a space
///
/// Rejected with 409 while bookings or reviews still reference the space;
/// foreign keys in the store backstop the check.
pub async fn delete_space(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    if Space::find_by_id(&state.db, id).await?.is_none() {
        return Err(ApiError::NotFound(format!("Space {} not found", id)));
    }

    if Space::has_dependents(&state.db, id).await? {
        return Err(ApiError::Conflict(format!(
            "Space {} still has bookings or reviews",
            id
        )));
    }

    Space::delete(&state.db, id).await?;

    tracing::debug!(space_id = id, "Deleted space");

    Ok(Json(json!({ "message": format!("Space {} deleted", id) })))
}
