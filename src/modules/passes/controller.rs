use axum::{Json, extract::State, http::StatusCode};

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{UserRole, authorize};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{IssuePassDto, IssuePassResponse, ScanPassDto, ScanPassResponse};
use super::service::PassService;

#[utoipa::path(
    post,
    path = "/api/passes",
    request_body = IssuePassDto,
    responses(
        (status = 201, description = "Pass token minted", body = IssuePassResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    ),
    tag = "Passes",
    security(("bearer_auth" = []))
)]
pub async fn issue_pass(
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<IssuePassDto>,
) -> Result<(StatusCode, Json<IssuePassResponse>), AppError> {
    authorize(Some(&auth_user), &[UserRole::Admin])?;

    Ok((StatusCode::CREATED, Json(PassService::issue(&dto))))
}

#[utoipa::path(
    post,
    path = "/api/passes/scan",
    request_body = ScanPassDto,
    responses(
        (status = 200, description = "Decoded pass", body = ScanPassResponse),
        (status = 400, description = "Malformed pass token"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Staff only"),
        (status = 429, description = "Too many scan attempts")
    ),
    tag = "Passes",
    security(("bearer_auth" = []))
)]
pub async fn scan_pass(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ScanPassDto>,
) -> Result<Json<ScanPassResponse>, AppError> {
    let pass = PassService::scan(&state, auth_user.email(), &dto.token)?;
    Ok(Json(ScanPassResponse::from(pass)))
}
