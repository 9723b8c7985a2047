//! Hotel Server - booking service for a small residency hotel
//!
//! # Overview
//!
//! Guests submit booking requests, staff view and check out active bookings,
//! the owner reviews current and historical bookings, and a confirmation
//! email is sent for every new booking.
//!
//! # Module structure
//!
//! ```text
//! hotel-server/src/
//! ├── core/          # Config, state, server
//! ├── auth/          # Role session tokens, route gates
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # JSON-file booking stores and models
//! ├── pricing/       # Room assignment, nightly rates
//! ├── email/         # SMTP confirmation mailer
//! └── utils/         # Errors, responses, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod email;
pub mod pricing;
pub mod utils;

// Re-export public types
pub use auth::{CurrentSession, Role, SessionService};
pub use core::{Config, Server, ServerState};
pub use db::{BookingStore, StoreError, StoreResult};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - tracing with a fixed target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load .env and initialize logging. Call once, before [`Config::from_env`].
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  __      __       __
   / / / /___  / /____  / /
  / /_/ / __ \/ __/ _ \/ /
 / __  / /_/ / /_/  __/ /
/_/ /_/\____/\__/\___/_/
    "#
    );
}
