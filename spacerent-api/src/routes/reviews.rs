/// Review endpoints
///
/// # Endpoints
///
/// - `GET /api/reviews` - List all reviews
/// - `POST /api/reviews` - Create a review
///
/// The rating is expected to be 1-5 but is stored as given.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use spacerent_shared::models::review::{CreateReview, Review};
use spacerent_shared::models::space::Space;
use spacerent_shared::models::user::User;

/// Create review request
///
/// Required fields are optional here so their absence reports a 400 naming
/// the field instead of a deserialization failure. Unknown fields are
/// ignored.
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    /// User writing the review (required, must exist)
    pub user_id: Option<i64>,

    /// Space being reviewed (required, must exist)
    pub space_id: Option<i64>,

    /// Rating, expected 1-5 (required)
    pub rating: Option<i64>,

    /// Review text (default "")
    pub comment: Option<String>,
}

/// List all reviews
pub async fn list_reviews(State(state): State<AppState>) -> ApiResult<Json<Vec<Review>>> {
    let reviews = Review::list(&state.db).await?;
    Ok(Json(reviews))
}

/// Create a review
///
/// Required fields, checked in order: `user_id`, `space_id`, `rating`.
/// The referenced user and space must exist.
pub async fn create_review(
    State(state): State<AppState>,
    Json(req): Json<CreateReviewRequest>,
) -> ApiResult<(StatusCode, Json<Review>)> {
    let user_id = req
        .user_id
        .ok_or_else(|| ApiError::missing_field("user_id"))?;
    let space_id = req
        .space_id
        .ok_or_else(|| ApiError::missing_field("space_id"))?;
    let rating = req
        .rating
        .ok_or_else(|| ApiError::missing_field("rating"))?;

    if User::find_by_id(&state.db, user_id).await?.is_none() {
        return Err(ApiError::unknown_reference("user_id", user_id));
    }
    if Space::find_by_id(&state.db, space_id).await?.is_none() {
        return Err(ApiError::unknown_reference("space_id", space_id));
    }

    let review = Review::create(
        &state.db,
        CreateReview {
            user_id,
            space_id,
            rating,
            comment: req.comment.unwrap_or_default(),
        },
    )
    .await?;

    tracing::debug!(review_id = review.id, space_id, user_id, "Created review");

    Ok((StatusCode::CREATED, Json(review)))
}
