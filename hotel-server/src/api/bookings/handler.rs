//! Booking API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{Booking, BookingCreate, BookingsDocument};
use crate::pricing;
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

/// GET /api/bookings - the full active-bookings document
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<BookingsDocument>> {
    let doc = state.bookings.load().await?;
    Ok(Json(doc))
}

/// What the guest gets back for a new booking
#[derive(Debug, Serialize)]
pub struct BookingConfirmation {
    pub room_number: String,
    pub price: i64,
}

/// POST /api/book - create a booking
///
/// Assigns a room, computes the total price, appends to the active store
/// and sends the confirmation email. The email is best-effort: a send
/// failure is logged and the booking stands.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<AppResponse<BookingConfirmation>>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let price = pricing::total_price(&payload.room_type, &payload.check_in, &payload.check_out)
        .map_err(|e| AppError::validation(format!("Invalid date: {}", e)))?;
    let room_number = pricing::assign_room();

    let booking = Booking {
        name: payload.name,
        email: payload.email,
        room_type: payload.room_type,
        check_in: payload.check_in,
        check_out: payload.check_out,
        room_number: room_number.clone(),
        price,
    };

    state.bookings.append(booking.clone()).await?;

    match &state.mailer {
        Some(mailer) => {
            if let Err(e) = mailer.send_booking_confirmation(&booking).await {
                tracing::warn!(to = %booking.email, error = %e, "Failed to send confirmation email");
            }
        }
        None => {
            tracing::warn!(to = %booking.email, "Mailer disabled, skipping confirmation email");
        }
    }

    tracing::info!(
        room_number = %room_number,
        room_type = %booking.room_type,
        price = price,
        "Booking created"
    );

    Ok(ok(BookingConfirmation { room_number, price }))
}

/// Checkout payload
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub room_number: String,
}

/// POST /api/checkout - check a room out (staff only)
///
/// Removes the booking from the active store and appends it to history.
/// An unknown room number still answers success with `data: false`; the
/// front desk treats a double checkout as already done.
pub async fn checkout(
    State(state): State<ServerState>,
    Json(req): Json<CheckoutRequest>,
) -> AppResult<Json<AppResponse<bool>>> {
    if req.room_number.is_empty() {
        return Err(AppError::invalid("No room number provided".to_string()));
    }

    let completed = state.bookings.remove_by_room(&req.room_number).await?;

    match completed {
        Some(booking) => {
            state.history.append(booking).await?;
            tracing::info!(room_number = %req.room_number, "Room checked out");
            Ok(ok(true))
        }
        None => {
            tracing::warn!(room_number = %req.room_number, "Checkout for unknown room");
            Ok(ok_with_message(false, "No active booking for this room"))
        }
    }
}
