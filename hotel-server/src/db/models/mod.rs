//! Data models for the store layer

mod booking;

pub use booking::{Booking, BookingCreate, BookingsDocument};
