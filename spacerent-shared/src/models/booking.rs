/// Booking model and lifecycle operations
///
/// A booking reserves a space for a date range and carries the one piece of
/// state in the system that actually transitions:
///
/// # State Machine
///
/// ```text
/// pending → confirmed   (payment)
/// pending → cancelled   (cancellation)
/// ```
///
/// Confirmed and cancelled are terminal. Both transitions are executed as a
/// guarded UPDATE (`WHERE id = ? AND status = 'pending'`), so two racing
/// requests commit at most one transition; the loser observes zero affected
/// rows.
///
/// Check-in and check-out dates are stored as opaque strings; no date-range
/// validation is performed on them.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE bookings (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     user_id INTEGER NOT NULL REFERENCES users(id),
///     space_id INTEGER NOT NULL REFERENCES spaces(id),
///     check_in_date TEXT NOT NULL,
///     check_out_date TEXT NOT NULL,
///     guests INTEGER NOT NULL DEFAULT 1,
///     total_price REAL NOT NULL,
///     status TEXT NOT NULL DEFAULT 'pending',
///     created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
///     updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use spacerent_shared::models::booking::{Booking, CreateBooking, Invoice};
/// use spacerent_shared::db::pool::{create_pool, DatabaseConfig};
/// use chrono::Utc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let booking = Booking::create(&pool, CreateBooking {
///     user_id: 1,
///     space_id: 1,
///     check_in_date: "2025-06-01".to_string(),
///     check_out_date: "2025-06-05".to_string(),
///     guests: 2,
///     total_price: 480.0,
/// }).await?;
///
/// // Pay: at most one caller wins the transition
/// if let Some(confirmed) = Booking::confirm_if_pending(&pool, booking.id).await? {
///     let invoice = Invoice::issue(&confirmed, Utc::now());
///     println!("Issued {}", invoice.invoice_number);
/// }
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::fmt;
use std::str::FromStr;

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Reserved, awaiting payment
    Pending,

    /// Paid for
    Confirmed,

    /// Withdrawn before payment
    Cancelled,
}

impl BookingStatus {
    /// Converts status to its stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(format!("unknown booking status: {}", other)),
        }
    }
}

/// Booking model representing a reservation of a space
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    /// Unique booking ID (store-assigned, auto-incrementing)
    pub id: i64,

    /// User who made the booking
    pub user_id: i64,

    /// Space being booked
    pub space_id: i64,

    /// Check-in date, stored as an opaque string
    pub check_in_date: String,

    /// Check-out date, stored as an opaque string
    pub check_out_date: String,

    /// Number of guests
    pub guests: i64,

    /// Total price for the stay
    pub total_price: f64,

    /// Current lifecycle status ("pending", "confirmed", or "cancelled")
    pub status: String,

    /// When the booking was created
    pub created_at: NaiveDateTime,

    /// When the booking was last updated
    pub updated_at: NaiveDateTime,
}

/// Input for creating a new booking
///
/// Bookings always start out pending.
#[derive(Debug, Clone)]
pub struct CreateBooking {
    /// User making the booking (must exist)
    pub user_id: i64,

    /// Space being booked (must exist)
    pub space_id: i64,

    /// Check-in date
    pub check_in_date: String,

    /// Check-out date
    pub check_out_date: String,

    /// Number of guests
    pub guests: i64,

    /// Total price for the stay
    pub total_price: f64,
}

/// Input for updating an existing booking
///
/// All fields are optional. Only `Some` fields are written; `None` leaves
/// the current value untouched. Setting `status` through this path applies
/// no state-machine check; it is an administrative override.
#[derive(Debug, Clone, Default)]
pub struct UpdateBooking {
    /// New status
    pub status: Option<BookingStatus>,

    /// New guest count
    pub guests: Option<i64>,

    /// New check-in date
    pub check_in_date: Option<String>,

    /// New check-out date
    pub check_out_date: Option<String>,
}

/// Invoice synthesized when a booking is paid
///
/// Invoices are derived, not persisted: the number is a pure function of the
/// booking id and the payment instant truncated to whole seconds, and
/// `paid_at` is the ISO-8601 encoding of that same instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice number, `INV-{booking_id}-{unix_seconds}`
    pub invoice_number: String,

    /// Booking this invoice settles
    pub booking_id: i64,

    /// Amount charged, equal to the booking's total price
    pub amount: f64,

    /// Payment instant, truncated to whole seconds
    pub paid_at: DateTime<Utc>,
}

impl Invoice {
    /// Derives the invoice for a paid booking from the payment instant
    pub fn issue(booking: &Booking, paid_at: DateTime<Utc>) -> Self {
        let unix_seconds = paid_at.timestamp();
        let truncated = DateTime::<Utc>::from_timestamp(unix_seconds, 0).unwrap_or(paid_at);

        Self {
            invoice_number: format!("INV-{}-{}", booking.id, unix_seconds),
            booking_id: booking.id,
            amount: booking.total_price,
            paid_at: truncated,
        }
    }
}

const BOOKING_COLUMNS: &str = "id, user_id, space_id, check_in_date, check_out_date, \
                               guests, total_price, status, created_at, updated_at";

impl Booking {
    /// Creates a new booking in pending status
    pub async fn create(pool: &SqlitePool, data: CreateBooking) -> Result<Self, sqlx::Error> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            r#"
            INSERT INTO bookings (user_id, space_id, check_in_date, check_out_date,
                                  guests, total_price)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {BOOKING_COLUMNS}
            "#,
        ))
        .bind(data.user_id)
        .bind(data.space_id)
        .bind(data.check_in_date)
        .bind(data.check_out_date)
        .bind(data.guests)
        .bind(data.total_price)
        .fetch_one(pool)
        .await?;

        Ok(booking)
    }

    /// Finds a booking by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(booking)
    }

    /// Lists all bookings in insertion order
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let bookings = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY id"
        ))
        .fetch_all(pool)
        .await?;

        Ok(bookings)
    }

    /// Applies a partial update to a booking
    ///
    /// Only fields present in `data` are written. Returns `None` if no
    /// booking with the given id exists.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateBooking,
    ) -> Result<Option<Self>, sqlx::Error> {
        let mut query = String::from("UPDATE bookings SET updated_at = CURRENT_TIMESTAMP");

        if data.status.is_some() {
            query.push_str(", status = ?");
        }
        if data.guests.is_some() {
            query.push_str(", guests = ?");
        }
        if data.check_in_date.is_some() {
            query.push_str(", check_in_date = ?");
        }
        if data.check_out_date.is_some() {
            query.push_str(", check_out_date = ?");
        }

        query.push_str(&format!(" WHERE id = ? RETURNING {BOOKING_COLUMNS}"));

        let mut q = sqlx::query_as::<_, Booking>(&query);

        if let Some(status) = data.status {
            q = q.bind(status.as_str());
        }
        if let Some(guests) = data.guests {
            q = q.bind(guests);
        }
        if let Some(check_in_date) = data.check_in_date {
            q = q.bind(check_in_date);
        }
        if let Some(check_out_date) = data.check_out_date {
            q = q.bind(check_out_date);
        }

        let booking = q.bind(id).fetch_optional(pool).await?;

        Ok(booking)
    }

    /// Transitions a pending booking to confirmed
    ///
    /// The status check and the write are a single guarded UPDATE, so
    /// concurrent callers transition the booking at most once. Returns
    /// `None` if the booking does not exist or is not pending.
    pub async fn confirm_if_pending(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            r#"
            UPDATE bookings
            SET status = 'confirmed',
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ? AND status = 'pending'
            RETURNING {BOOKING_COLUMNS}
            "#,
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(booking)
    }

    /// Transitions a pending booking to cancelled
    ///
    /// Same guarded-UPDATE shape as [`Booking::confirm_if_pending`]; a
    /// confirmed booking cannot be cancelled through this path.
    pub async fn cancel_if_pending(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            r#"
            UPDATE bookings
            SET status = 'cancelled',
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ? AND status = 'pending'
            RETURNING {BOOKING_COLUMNS}
            "#,
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(booking)
    }
}
