//! Core module - server configuration, state and errors
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared server state
//! - [`Server`] - HTTP server
//! - [`ServerError`] - server error

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, SmtpConfig};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
