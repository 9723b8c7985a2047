//! Dashboard API module
//!
//! Data behind the staff and owner dashboards; each route is gated on its
//! role's session.

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::{Role, require_role};
use crate::core::ServerState;

pub use handler::OwnerDashboard;

pub fn router() -> Router<ServerState> {
    let staff_routes = Router::new()
        .route("/api/staff/dashboard", get(handler::staff_dashboard))
        .layer(middleware::from_fn(require_role(Role::Staff)));

    let owner_routes = Router::new()
        .route("/api/owner/dashboard", get(handler::owner_dashboard))
        .layer(middleware::from_fn(require_role(Role::Owner)));

    staff_routes.merge(owner_routes)
}
