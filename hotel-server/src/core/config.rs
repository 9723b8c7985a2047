use std::path::PathBuf;

use crate::auth::SessionConfig;

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/hotel-server | Work directory holding the store files |
/// | HTTP_PORT | 5000 | HTTP API port |
/// | ENVIRONMENT | development | Runtime environment |
/// | STAFF_PASSWORD | EAAadmin123 | Shared staff password |
/// | OWNER_PASSWORD | EAAowner123 | Shared owner password |
/// | EMAIL_USER | (unset) | SMTP username, also the From address |
/// | EMAIL_PASS | (unset) | SMTP password |
/// | SMTP_RELAY | smtp.gmail.com | SMTP relay host |
/// | SMTP_PORT | 587 | SMTP relay port (STARTTLS) |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/hotel HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory, stores bookings.json / history.json
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Shared staff password (staff dashboard, checkout)
    pub staff_password: String,
    /// Shared owner password (owner dashboard)
    pub owner_password: String,
    /// Role session token configuration
    pub session: SessionConfig,
    /// Outbound SMTP configuration
    pub smtp: SmtpConfig,
}

/// SMTP relay settings for the confirmation mailer
///
/// The mailer stays disabled while `username`/`password` are unset.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub relay: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl SmtpConfig {
    pub fn from_env() -> Self {
        Self {
            relay: std::env::var("SMTP_RELAY").unwrap_or_else(|_| "smtp.gmail.com".into()),
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(587),
            username: std::env::var("EMAIL_USER").ok(),
            password: std::env::var("EMAIL_PASS").ok(),
        }
    }

    /// Whether both credentials are present
    pub fn is_configured(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/hotel-server".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            staff_password: std::env::var("STAFF_PASSWORD").unwrap_or_else(|_| "EAAadmin123".into()),
            owner_password: std::env::var("OWNER_PASSWORD").unwrap_or_else(|_| "EAAowner123".into()),
            session: SessionConfig::default(),
            smtp: SmtpConfig::from_env(),
        }
    }

    /// Override selected fields with custom values
    ///
    /// Mostly used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Path of the active-bookings store
    pub fn bookings_file(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("bookings.json")
    }

    /// Path of the checked-out history store
    pub fn history_file(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("history.json")
    }

    /// Create the work directory if it does not exist yet
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
