use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-level error carrying an HTTP status and a caller-visible
/// message. Every failure kind in the API is recoverable and scoped to the
/// request that triggered it; nothing here aborts the process.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn internal_error(msg: String) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, anyhow::anyhow!(msg))
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized(msg: String) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow::anyhow!(msg))
    }

    pub fn forbidden(msg: String) -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow::anyhow!(msg))
    }

    /// A matching code whose issuance time fell outside the TTL. Kept
    /// distinct from `bad_request` so "wrong code" and "request a new one"
    /// stay separate remediations for the client.
    pub fn gone(msg: String) -> Self {
        Self::new(StatusCode::GONE, anyhow::anyhow!(msg))
    }

    pub fn too_many_requests(msg: String) -> Self {
        Self::new(StatusCode::TOO_MANY_REQUESTS, anyhow::anyhow!(msg))
    }

    /// The notifier reported a delivery failure.
    pub fn bad_gateway(msg: String) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, anyhow::anyhow!(msg))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status, body).into_response()
    }
}
