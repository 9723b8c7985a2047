//! Dashboard Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{Booking, BookingsDocument};
use crate::utils::AppResult;

/// GET /api/staff/dashboard - active bookings for the front desk
pub async fn staff_dashboard(
    State(state): State<ServerState>,
) -> AppResult<Json<BookingsDocument>> {
    let doc = state.bookings.load().await?;
    Ok(Json(doc))
}

/// Owner dashboard payload: current and historical bookings
#[derive(Debug, Serialize)]
pub struct OwnerDashboard {
    pub bookings: Vec<Booking>,
    pub past_bookings: Vec<Booking>,
}

/// GET /api/owner/dashboard - active plus checked-out bookings
pub async fn owner_dashboard(State(state): State<ServerState>) -> AppResult<Json<OwnerDashboard>> {
    let current = state.bookings.load().await?;
    let history = state.history.load().await?;

    Ok(Json(OwnerDashboard {
        bookings: current.bookings,
        past_bookings: history.bookings,
    }))
}
