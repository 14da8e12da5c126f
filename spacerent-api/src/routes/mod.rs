/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `meta`: API metadata at the root path
/// - `health`: Health check endpoint
/// - `spaces`: Space listing CRUD
/// - `users`: User accounts
/// - `bookings`: Bookings and the payment/cancellation lifecycle
/// - `reviews`: Space reviews

pub mod bookings;
pub mod health;
pub mod meta;
pub mod reviews;
pub mod spaces;
pub mod users;
