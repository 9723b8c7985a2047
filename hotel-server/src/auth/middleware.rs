//! Session middleware
//!
//! Axum middleware gating the staff/owner surfaces

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppError;
use crate::auth::{CurrentSession, Role, SessionService};
use crate::core::ServerState;
use crate::security_log;

/// Session middleware - requires a valid role session
///
/// Extracts and verifies the token from `Authorization: Bearer <token>`,
/// then injects [`CurrentSession`] into the request extensions.
///
/// # Paths that skip the check
///
/// - `OPTIONS *` (CORS preflight)
/// - anything outside `/api/`
/// - the guest endpoints and the two logins
///
/// # Errors
///
/// | Failure | HTTP status |
/// |---------|-------------|
/// | Missing Authorization header | 401 Unauthorized |
/// | Expired token | 401 TokenExpired |
/// | Invalid token | 401 InvalidToken |
pub async fn require_session(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // Allow CORS preflight OPTIONS requests through
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes skip the check (and 404 as usual)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    // Guest endpoints and logins are public
    let is_public_api_route = matches!(
        path,
        "/api/bookings" | "/api/book" | "/api/staff/login" | "/api/owner/login"
    );
    if is_public_api_route {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => SessionService::extract_from_header(header)
            .ok_or_else(AppError::invalid_token)?,
        None => {
            security_log!("WARN", "session_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    match state.sessions.verify(token) {
        Ok(claims) => {
            let session = CurrentSession::from(claims);
            req.extensions_mut().insert(session);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "session_invalid",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            match e {
                crate::auth::SessionError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token()),
            }
        }
    }
}

/// Role gate - requires the session to carry a specific role
///
/// # Usage
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/api/checkout", post(handler::checkout))
///     .layer(middleware::from_fn(require_role(Role::Staff)));
/// ```
///
/// # Errors
///
/// Wrong role returns 403 Forbidden
pub fn require_role(
    role: Role,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let session = req
                .extensions()
                .get::<CurrentSession>()
                .copied()
                .ok_or(AppError::unauthorized())?;

            if session.role != role {
                security_log!(
                    "WARN",
                    "role_denied",
                    session_role = session.role.as_str(),
                    required_role = role.as_str()
                );
                return Err(AppError::forbidden(format!(
                    "{} access required",
                    role.as_str()
                )));
            }

            Ok(next.run(req).await)
        })
    }
}
