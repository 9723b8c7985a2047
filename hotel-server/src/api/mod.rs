//! API routes
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`bookings`] - guest booking endpoints and staff checkout
//! - [`auth`] - staff/owner logins
//! - [`dashboard`] - session-gated dashboard data
//!
//! One router module per resource, merged into the application router by
//! [`build_app`]; the session middleware wraps the whole API surface and
//! skips the public routes itself.

pub mod auth;
pub mod bookings;
pub mod dashboard;
pub mod health;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::auth::require_session;
use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// HTTP request log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the application router with state and middleware applied
pub fn build_app(state: ServerState) -> Router {
    Router::<ServerState>::new()
        .merge(auth::router())
        .merge(health::router())
        .merge(bookings::router())
        .merge(dashboard::router())
        // Session middleware at router level; it skips public routes itself
        .layer(middleware::from_fn_with_state(state.clone(), require_session))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
}
