//! Role-based authorization for record-viewing endpoints.
//!
//! Roles form a closed set with no hierarchy: a check passes only when
//! the caller's role is an exact member of the allowed set supplied at
//! the call site. `admin` does not implicitly satisfy a `teacher` check.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::metrics;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// The closed set of roles an authenticated identity can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
    Guardian,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Teacher => "teacher",
            UserRole::Guardian => "guardian",
        }
    }

    /// Human-readable label, mapped exhaustively so an unknown role can
    /// never fall through to a placeholder.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::Teacher => "Teacher",
            UserRole::Guardian => "Guardian",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide whether `identity` may proceed against `allowed_roles`.
///
/// No identity is 401 unauthenticated; an identity whose role is outside
/// the allowed set is 403 forbidden, naming the role it does have. The
/// check reads the role and nothing else; it never mutates identity or
/// resource state.
pub fn authorize(identity: Option<&AuthUser>, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    let auth_user = identity
        .ok_or_else(|| AppError::unauthorized("Authentication required".to_string()))?;

    let role = auth_user.role();
    if !allowed_roles.contains(&role) {
        return Err(AppError::forbidden(format!(
            "Access denied for role {}. Allowed roles: {:?}",
            role, allowed_roles
        )));
    }

    Ok(())
}

/// Middleware that gates a subtree on role membership.
///
/// A failed `AuthUser` extraction is treated as no identity, so missing
/// and invalid tokens both surface as unauthenticated.
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await.ok();

    if let Err(err) = authorize(auth_user.as_ref(), &allowed_roles) {
        let role = auth_user.as_ref().map(|u| u.role().as_str()).unwrap_or("none");
        metrics::track_authorization_denied(role);
        return Err(err);
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Gate for record-viewing staff routes (admin and teacher).
pub async fn require_staff(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(
        State(state),
        req,
        next,
        vec![UserRole::Admin, UserRole::Teacher],
    )
    .await
    {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
