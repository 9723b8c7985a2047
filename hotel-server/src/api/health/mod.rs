//! Health check route
//!
//! | Path | Method | Description | Auth |
//! |------|--------|-------------|------|
//! | /health | GET | status, version, store reachability | none |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Health check route - public (no session required)
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (healthy | degraded)
    status: &'static str,
    /// Version
    version: &'static str,
    /// Active booking count, absent when the store is unreadable
    #[serde(skip_serializing_if = "Option::is_none")]
    active_bookings: Option<usize>,
    /// Whether the confirmation mailer is configured
    mailer_enabled: bool,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let active_bookings = state
        .bookings
        .load()
        .await
        .map(|doc| doc.bookings.len())
        .ok();

    Json(HealthResponse {
        status: if active_bookings.is_some() {
            "healthy"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
        active_bookings,
        mailer_enabled: state.mailer.is_some(),
    })
}
