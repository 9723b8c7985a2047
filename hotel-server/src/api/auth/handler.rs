//! Login Handlers
//!
//! One shared password per role; a correct password is answered with a
//! session token for that role.

use std::time::Duration;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::AppError;
use crate::auth::Role;
use crate::core::ServerState;
use crate::security_log;

/// Fixed delay for login attempts to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
    pub expires_in_minutes: i64,
}

/// POST /api/staff/login
pub async fn staff_login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    login(state, Role::Staff, req).await
}

/// POST /api/owner/login
pub async fn owner_login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    login(state, Role::Owner, req).await
}

async fn login(
    state: ServerState,
    role: Role,
    req: LoginRequest,
) -> Result<Json<LoginResponse>, AppError> {
    let expected = match role {
        Role::Staff => &state.config.staff_password,
        Role::Owner => &state.config.owner_password,
    };

    // Fixed delay before checking the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    if req.password != *expected {
        security_log!("WARN", "login_failed", role = role.as_str());
        tracing::warn!(role = role.as_str(), "Login failed - incorrect password");
        return Err(AppError::invalid("Incorrect password! Try again.".to_string()));
    }

    let token = state
        .sessions
        .issue(role)
        .map_err(|e| AppError::internal(format!("Failed to issue session token: {}", e)))?;

    tracing::info!(role = role.as_str(), "Role login successful");

    Ok(Json(LoginResponse {
        token,
        role,
        expires_in_minutes: state.sessions.config.expiration_minutes,
    }))
}
