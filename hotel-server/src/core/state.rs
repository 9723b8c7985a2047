use std::path::PathBuf;
use std::sync::Arc;

use crate::auth::SessionService;
use crate::core::Config;
use crate::db::BookingStore;
use crate::email::Mailer;

/// Shared server state - one clone per request handler
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Configuration (immutable) |
/// | bookings | BookingStore | Active bookings (bookings.json) |
/// | history | BookingStore | Checked-out bookings (history.json) |
/// | sessions | Arc<SessionService> | Role session tokens |
/// | mailer | Option<Mailer> | Confirmation mailer, None without credentials |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Active bookings store
    pub bookings: BookingStore,
    /// Checked-out bookings store
    pub history: BookingStore,
    /// Role session token service (Arc shared ownership)
    pub sessions: Arc<SessionService>,
    /// Confirmation mailer (disabled when SMTP credentials are missing)
    pub mailer: Option<Mailer>,
}

impl ServerState {
    /// Initialize server state
    ///
    /// In order:
    /// 1. work directory (created if missing)
    /// 2. both stores (files materialized, contents counted)
    /// 3. session service and mailer
    ///
    /// # Panics
    ///
    /// Panics when the work directory or a store file cannot be initialized
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory");

        let bookings = BookingStore::new(config.bookings_file());
        let history = BookingStore::new(config.history_file());

        // Materialize both files up front so a read-only runtime fails fast
        let active = bookings
            .load()
            .await
            .expect("Failed to initialize booking store");
        let past = history
            .load()
            .await
            .expect("Failed to initialize history store");
        tracing::info!(
            active = active.bookings.len(),
            history = past.bookings.len(),
            "Booking stores ready"
        );

        let sessions = Arc::new(SessionService::with_config(config.session.clone()));

        let mailer = Mailer::from_config(&config.smtp);
        if mailer.is_none() {
            tracing::warn!("Email credentials not configured; confirmation emails disabled");
        }

        Self {
            config: config.clone(),
            bookings,
            history,
            sessions,
            mailer,
        }
    }

    /// Work directory path
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    /// Session token service
    pub fn session_service(&self) -> Arc<SessionService> {
        self.sessions.clone()
    }
}
