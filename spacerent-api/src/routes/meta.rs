/// API metadata endpoint
///
/// # Endpoint
///
/// ```text
/// GET /
/// ```
///
/// Returns the service name, version, and a map of the resource roots, so
/// a client (or a curious browser) can discover the API surface.

use axum::Json;
use serde_json::{json, Value};

/// Root metadata handler
pub async fn api_index() -> Json<Value> {
    Json(json!({
        "name": "SpaceRent API",
        "description": "Spaces for rent: list spaces, book them, review them",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "spaces": "/api/spaces",
            "users": "/api/users",
            "bookings": "/api/bookings",
            "reviews": "/api/reviews",
            "health": "/health"
        }
    }))
}
