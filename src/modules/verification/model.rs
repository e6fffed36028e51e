use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Why a submitted code was rejected. The two kinds stay distinguishable
/// end to end: a wrong value means "check the email again", a stale one
/// means "request a new code".
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("Verification code does not match")]
    Mismatched,
    #[error("Verification code has expired")]
    Expired,
}

/// A 6-digit code together with its issuance time.
///
/// Transient by design: it lives in the issued-code store between issue
/// and confirmation and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode {
    pub value: String,
    pub issued_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Draw a uniformly random code from `[100000, 999999]`.
    ///
    /// The range starts at 100000, so every draw is six digits on its
    /// own; no zero-padding of smaller values is involved.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let value = rng.gen_range(100_000u32..=999_999).to_string();

        Self {
            value,
            issued_at: Utc::now(),
        }
    }

    /// Check `submitted` against this code at time `now`.
    ///
    /// Equality is checked first, so a wrong value reports `Mismatched`
    /// regardless of timing. A matching value is then checked for
    /// freshness; age exactly equal to `ttl` is still fresh. Both checks
    /// always apply, never equality alone.
    pub fn validate(
        &self,
        submitted: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<(), VerifyError> {
        if submitted != self.value {
            return Err(VerifyError::Mismatched);
        }

        if now - self.issued_at > ttl {
            return Err(VerifyError::Expired);
        }

        Ok(())
    }
}

// DTOs

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ConfirmCodeDto {
    /// The 6-digit code received by email
    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CodeRequestedResponse {
    pub message: String,
    pub expires_in_seconds: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CodeConfirmedResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_format() {
        for _ in 0..10_000 {
            let code = VerificationCode::generate();
            assert_eq!(code.value.len(), CODE_LENGTH);
            assert!(code.value.chars().all(|c| c.is_ascii_digit()));

            let num: u32 = code.value.parse().unwrap();
            assert!((100_000..=999_999).contains(&num));
        }
    }

    #[test]
    fn test_validate_fresh_match() {
        let code = VerificationCode::generate();
        let at = code.issued_at + Duration::milliseconds(999);

        assert!(
            code.validate(&code.value, Duration::milliseconds(1000), at)
                .is_ok()
        );
    }

    #[test]
    fn test_validate_age_equal_to_ttl_is_fresh() {
        let code = VerificationCode::generate();
        let at = code.issued_at + Duration::milliseconds(1000);

        assert!(
            code.validate(&code.value, Duration::milliseconds(1000), at)
                .is_ok()
        );
    }

    #[test]
    fn test_validate_expired_match_rejected() {
        let code = VerificationCode::generate();
        let at = code.issued_at + Duration::milliseconds(1001);

        assert_eq!(
            code.validate(&code.value, Duration::milliseconds(1000), at),
            Err(VerifyError::Expired)
        );
    }

    #[test]
    fn test_validate_mismatch_regardless_of_timing() {
        let code = VerificationCode {
            value: "482913".to_string(),
            issued_at: Utc::now(),
        };

        // Fresh but wrong
        let fresh = code.issued_at + Duration::milliseconds(1);
        assert_eq!(
            code.validate("000000", Duration::milliseconds(1000), fresh),
            Err(VerifyError::Mismatched)
        );

        // Stale and wrong still reports the mismatch, not the expiry
        let stale = code.issued_at + Duration::milliseconds(5000);
        assert_eq!(
            code.validate("000000", Duration::milliseconds(1000), stale),
            Err(VerifyError::Mismatched)
        );
    }

    #[test]
    fn test_codes_vary() {
        let values: std::collections::HashSet<String> = (0..100)
            .map(|_| VerificationCode::generate().value)
            .collect();
        assert!(values.len() > 1);
    }
}
