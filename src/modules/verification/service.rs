use anyhow::anyhow;
use tracing::{info, instrument};

use crate::metrics;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{CodeConfirmedResponse, CodeRequestedResponse, VerificationCode, VerifyError};

pub struct VerificationService;

impl VerificationService {
    /// Issue a fresh code for `email` and hand it to the notifier.
    ///
    /// The limiter is consulted before any other work so throttled
    /// callers fail fast without consuming randomness or sending mail.
    /// On delivery failure the code is dropped; a new request is needed.
    #[instrument(skip(state))]
    pub async fn request_code(
        state: &AppState,
        email: &str,
    ) -> Result<CodeRequestedResponse, AppError> {
        if !state.code_limiter.should_allow(email) {
            return Err(AppError::too_many_requests(
                "A code was requested recently. Wait before requesting another.".to_string(),
            ));
        }

        let code = VerificationCode::generate();
        state
            .notifier
            .send_verification_code(email, &code.value)
            .await?;
        state.codes.put(email, code);

        metrics::track_code_issued();
        info!(email = %email, "Verification code issued");

        Ok(CodeRequestedResponse {
            message: "A verification code has been sent to your email address.".to_string(),
            expires_in_seconds: state.verification_config.code_ttl_secs,
        })
    }

    /// Check a submitted code against the one issued for `email`,
    /// consuming it on success.
    #[instrument(skip(state, submitted))]
    pub async fn confirm_code(
        state: &AppState,
        email: &str,
        submitted: &str,
    ) -> Result<CodeConfirmedResponse, AppError> {
        let issued = state.codes.get(email).ok_or_else(|| {
            AppError::not_found(anyhow!("No verification code was issued for this address"))
        })?;

        let ttl = state.verification_config.code_ttl();
        match issued.validate(submitted, ttl, chrono::Utc::now()) {
            Ok(()) => {
                state.codes.remove(email);
                metrics::track_code_confirmed("confirmed");
                info!(email = %email, "Email address verified");

                Ok(CodeConfirmedResponse {
                    message: "Email address verified.".to_string(),
                })
            }
            Err(err @ VerifyError::Mismatched) => {
                metrics::track_code_confirmed("mismatched");
                Err(AppError::bad_request(err))
            }
            Err(err @ VerifyError::Expired) => {
                metrics::track_code_confirmed("expired");
                Err(AppError::gone(err.to_string()))
            }
        }
    }
}
