use axum::{Json, extract::State, http::StatusCode};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CodeConfirmedResponse, CodeRequestedResponse, ConfirmCodeDto};
use super::service::VerificationService;

#[utoipa::path(
    post,
    path = "/api/verification/request-code",
    responses(
        (status = 202, description = "Code issued and handed to the notifier", body = CodeRequestedResponse),
        (status = 401, description = "Unauthorized"),
        (status = 429, description = "A code was requested too recently"),
        (status = 502, description = "Code delivery failed")
    ),
    tag = "Verification",
    security(("bearer_auth" = []))
)]
pub async fn request_code(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<(StatusCode, Json<CodeRequestedResponse>), AppError> {
    let response = VerificationService::request_code(&state, auth_user.email()).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/verification/confirm",
    request_body = ConfirmCodeDto,
    responses(
        (status = 200, description = "Email address verified", body = CodeConfirmedResponse),
        (status = 400, description = "Submitted code does not match"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No code was issued for this address"),
        (status = 410, description = "Code matched but has expired")
    ),
    tag = "Verification",
    security(("bearer_auth" = []))
)]
pub async fn confirm_code(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ConfirmCodeDto>,
) -> Result<Json<CodeConfirmedResponse>, AppError> {
    let response = VerificationService::confirm_code(&state, auth_user.email(), &dto.code).await?;
    Ok(Json(response))
}
