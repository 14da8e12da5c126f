/// Booking endpoints and the payment lifecycle
///
/// # Endpoints
///
/// - `GET /api/bookings` - List all bookings
/// - `GET /api/bookings/:id` - Get one booking
/// - `POST /api/bookings` - Create a booking (starts pending)
/// - `PUT /api/bookings/:id` - Partially update a booking
/// - `POST /api/bookings/:id/pay` - Pay: pending → confirmed, returns an invoice
/// - `POST /api/bookings/:id/cancel` - Cancel: pending → cancelled
///
/// Pay and cancel are the only conditional state transitions in the system.
/// Both run as a guarded UPDATE in the store, so two racing requests commit
/// at most one transition; the loser gets a 400.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use spacerent_shared::models::booking::{
    Booking, BookingStatus, CreateBooking, Invoice, UpdateBooking,
};
use spacerent_shared::models::space::Space;
use spacerent_shared::models::user::User;

/// Create booking request
///
/// Required fields are optional here so their absence reports a 400 naming
/// the field instead of a deserialization failure. Unknown fields are
/// ignored.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    /// User making the booking (required, must exist)
    pub user_id: Option<i64>,

    /// Space being booked (required, must exist)
    pub space_id: Option<i64>,

    /// Check-in date, an opaque date string (required)
    pub check_in_date: Option<String>,

    /// Check-out date, an opaque date string (required)
    pub check_out_date: Option<String>,

    /// Number of guests (default 1)
    pub guests: Option<i64>,

    /// Total price for the stay (required)
    pub total_price: Option<f64>,
}

/// Update booking request - any subset of the mutable fields
#[derive(Debug, Deserialize)]
pub struct UpdateBookingRequest {
    /// New status; must be one of "pending", "confirmed", "cancelled"
    pub status: Option<String>,

    /// New guest count
    pub guests: Option<i64>,

    /// New check-in date
    pub check_in_date: Option<String>,

    /// New check-out date
    pub check_out_date: Option<String>,
}

/// Pay response: confirmation message plus the synthesized invoice
#[derive(Debug, Serialize)]
pub struct PayResponse {
    /// Confirmation message
    pub message: String,

    /// Invoice for the payment
    pub invoice: Invoice,
}

/// Cancel response: confirmation message plus the cancelled booking
#[derive(Debug, Serialize)]
pub struct CancelResponse {
    /// Confirmation message
    pub message: String,

    /// The booking after cancellation
    pub booking: Booking,
}

/// List all bookings
pub async fn list_bookings(State(state): State<AppState>) -> ApiResult<Json<Vec<Booking>>> {
    let bookings = Booking::list(&state.db).await?;
    Ok(Json(bookings))
}

/// Get one booking by id
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Booking>> {
    let booking = Booking::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Booking {} not found", id)))?;

    Ok(Json(booking))
}

/// Create a booking
///
/// Required fields, checked in order: `user_id`, `space_id`,
/// `check_in_date`, `check_out_date`, `total_price`. The referenced user
/// and space must exist. Dates are opaque strings; no range validation is
/// performed on them. The booking starts out pending.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> ApiResult<(StatusCode, Json<Booking>)> {
    let user_id = req
        .user_id
        .ok_or_else(|| ApiError::missing_field("user_id"))?;
    let space_id = req
        .space_id
        .ok_or_else(|| ApiError::missing_field("space_id"))?;
    let check_in_date = req
        .check_in_date
        .ok_or_else(|| ApiError::missing_field("check_in_date"))?;
    let check_out_date = req
        .check_out_date
        .ok_or_else(|| ApiError::missing_field("check_out_date"))?;
    let total_price = req
        .total_price
        .ok_or_else(|| ApiError::missing_field("total_price"))?;

    if User::find_by_id(&state.db, user_id).await?.is_none() {
        return Err(ApiError::unknown_reference("user_id", user_id));
    }
    if Space::find_by_id(&state.db, space_id).await?.is_none() {
        return Err(ApiError::unknown_reference("space_id", space_id));
    }

    let booking = Booking::create(
        &state.db,
        CreateBooking {
            user_id,
            space_id,
            check_in_date,
            check_out_date,
            guests: req.guests.unwrap_or(1),
            total_price,
        },
    )
    .await?;

    tracing::debug!(booking_id = booking.id, space_id, user_id, "Created booking");

    Ok((StatusCode::CREATED, Json(booking)))
}

/// Partially update a booking
///
/// May mutate `status`, `guests`, `check_in_date`, and `check_out_date`.
/// This is an administrative path: the status may be set to any lifecycle
/// state without a transition check, but unknown status strings are
/// rejected.
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateBookingRequest>,
) -> ApiResult<Json<Booking>> {
    let status = match req.status.as_deref() {
        Some(raw) => Some(
            raw.parse::<BookingStatus>()
                .map_err(ApiError::BadRequest)?,
        ),
        None => None,
    };

    let booking = Booking::update(
        &state.db,
        id,
        UpdateBooking {
            status,
            guests: req.guests,
            check_in_date: req.check_in_date,
            check_out_date: req.check_out_date,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("Booking {} not found", id)))?;

    Ok(Json(booking))
}

/// Pay for a booking
///
/// Precondition: the booking is pending. On success the booking is
/// confirmed and an invoice is synthesized from the payment instant; the
/// invoice is returned, not persisted. Paying a booking that is already
/// confirmed (or cancelled) is a 400 and mutates nothing.
pub async fn pay_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<PayResponse>> {
    // Existence is checked before the status precondition
    let booking = Booking::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Booking {} not found", id)))?;

    let Some(confirmed) = Booking::confirm_if_pending(&state.db, id).await? else {
        // Lost the transition: report the status the store holds now
        let status = Booking::find_by_id(&state.db, id)
            .await?
            .map(|b| b.status)
            .unwrap_or(booking.status);
        return Err(ApiError::InvalidState(format!(
            "Booking {} is not pending (status: {})",
            id, status
        )));
    };

    let invoice = Invoice::issue(&confirmed, Utc::now());

    tracing::info!(
        booking_id = id,
        invoice_number = %invoice.invoice_number,
        amount = invoice.amount,
        "Booking paid and confirmed"
    );

    Ok(Json(PayResponse {
        message: format!("Booking {} confirmed", id),
        invoice,
    }))
}

/// Cancel a booking
///
/// Precondition: the booking is pending. Confirmed bookings cannot be
/// cancelled through the API.
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<CancelResponse>> {
    let booking = Booking::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Booking {} not found", id)))?;

    let Some(cancelled) = Booking::cancel_if_pending(&state.db, id).await? else {
        let status = Booking::find_by_id(&state.db, id)
            .await?
            .map(|b| b.status)
            .unwrap_or(booking.status);
        return Err(ApiError::InvalidState(format!(
            "Booking {} is not pending (status: {})",
            id, status
        )));
    };

    tracing::info!(booking_id = id, "Booking cancelled");

    Ok(Json(CancelResponse {
        message: format!("Booking {} cancelled", id),
        booking: cancelled,
    }))
}
