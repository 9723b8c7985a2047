//! Login API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub use handler::{LoginRequest, LoginResponse};

/// Login routes - public
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/staff/login", post(handler::staff_login))
        .route("/api/owner/login", post(handler::owner_login))
}
