//! Booking Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A confirmed booking as persisted in the store files
///
/// `room_number` doubles as the checkout key; there is no other identifier.
/// Dates stay in their `YYYY-MM-DD` wire form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub name: String,
    pub email: String,
    pub room_type: String,
    pub check_in: String,
    pub check_out: String,
    /// Assigned at creation, `"{floor}0{room}"`
    pub room_number: String,
    /// Total price in rupees, computed at creation
    pub price: i64,
}

/// Create booking payload (guest request)
///
/// Presence checks only; dates are validated when the price is computed.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "room_type is required"))]
    pub room_type: String,
    #[validate(length(min = 1, message = "check_in is required"))]
    pub check_in: String,
    #[validate(length(min = 1, message = "check_out is required"))]
    pub check_out: String,
}

/// On-disk document shape shared by both stores
///
/// ```json
/// { "bookings": [ ... ] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingsDocument {
    pub bookings: Vec<Booking>,
}
