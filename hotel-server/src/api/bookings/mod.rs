//! Booking API module
//!
//! Guest-facing booking endpoints plus the staff-gated checkout.

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::{Role, require_role};
use crate::core::ServerState;

pub use handler::{BookingConfirmation, CheckoutRequest};

pub fn router() -> Router<ServerState> {
    let guest_routes = Router::new()
        .route("/api/bookings", get(handler::list))
        .route("/api/book", post(handler::create));

    let staff_routes = Router::new()
        .route("/api/checkout", post(handler::checkout))
        .layer(middleware::from_fn(require_role(Role::Staff)));

    guest_routes.merge(staff_routes)
}
