//! Role session tokens
//!
//! The service knows exactly two roles, each unlocked by a shared password.
//! A successful login is answered with a signed, expiring session token
//! (HS256) carrying the role; gated routes verify it on every request.
//! Deliberately not a real authentication model: no users, no revocation.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two fixed roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Front desk: sees active bookings, performs checkout
    Staff,
    /// Sees active and historical bookings
    Owner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Staff => "staff",
            Role::Owner => "owner",
        }
    }
}

/// Session token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Signing secret (should be at least 32 bytes)
    pub secret: String,
    /// Token lifetime (minutes)
    pub expiration_minutes: i64,
    /// Token issuer
    pub issuer: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let secret = std::env::var("SESSION_SECRET").unwrap_or_else(|_| {
            tracing::warn!("SESSION_SECRET not set, using built-in default");
            "SuperSecretKeyForSession123!".to_string()
        });

        Self {
            secret,
            expiration_minutes: std::env::var("SESSION_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1440),
            issuer: std::env::var("SESSION_ISSUER").unwrap_or_else(|_| "hotel-server".to_string()),
        }
    }
}

/// Claims stored in a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Role name (subject)
    pub sub: String,
    /// Role
    pub role: Role,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
    /// Issuer
    pub iss: String,
}

/// Session token errors
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// Session token service
#[derive(Clone)]
pub struct SessionService {
    pub config: SessionConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionService {
    /// Create a session service with the default configuration
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session service with the given configuration
    pub fn with_config(config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a session token for a role
    pub fn issue(&self, role: Role) -> Result<String, SessionError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: role.as_str().to_string(),
            role,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| SessionError::GenerationFailed(e.to_string()))
    }

    /// Verify and decode a session token
    pub fn verify(&self, token: &str) -> Result<Claims, SessionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => SessionError::ExpiredToken,
                ErrorKind::InvalidSignature => SessionError::InvalidSignature,
                _ => SessionError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

/// Verified session context, injected into request extensions by the
/// session middleware
#[derive(Debug, Clone, Copy)]
pub struct CurrentSession {
    pub role: Role,
    pub expires_at: i64,
}

impl From<Claims> for CurrentSession {
    fn from(claims: Claims) -> Self {
        Self {
            role: claims.role,
            expires_at: claims.exp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SessionConfig {
        SessionConfig {
            secret: "unit-test-secret-unit-test-secret".to_string(),
            expiration_minutes: 60,
            issuer: "hotel-server".to_string(),
        }
    }

    #[test]
    fn issue_and_verify_round_trips() {
        let service = SessionService::with_config(test_config());

        let token = service.issue(Role::Staff).expect("issue failed");
        let claims = service.verify(&token).expect("verify failed");

        assert_eq!(claims.role, Role::Staff);
        assert_eq!(claims.sub, "staff");
        assert_eq!(claims.iss, "hotel-server");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = SessionConfig {
            // Well past the validation leeway
            expiration_minutes: -5,
            ..test_config()
        };
        let service = SessionService::with_config(config);

        let token = service.issue(Role::Owner).expect("issue failed");
        let err = service.verify(&token).expect_err("expired token accepted");
        assert!(matches!(err, SessionError::ExpiredToken));
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let service = SessionService::with_config(test_config());
        let other = SessionService::with_config(SessionConfig {
            secret: "another-secret-another-secret-123".to_string(),
            ..test_config()
        });

        let token = other.issue(Role::Staff).expect("issue failed");
        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn foreign_issuer_is_rejected() {
        let service = SessionService::with_config(test_config());
        let other = SessionService::with_config(SessionConfig {
            issuer: "someone-else".to_string(),
            ..test_config()
        });

        let token = other.issue(Role::Staff).expect("issue failed");
        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn bearer_prefix_is_stripped() {
        assert_eq!(
            SessionService::extract_from_header("Bearer abc.def.ghi"),
            Some("abc.def.ghi")
        );
        assert_eq!(SessionService::extract_from_header("Basic abc"), None);
    }
}
