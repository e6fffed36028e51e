use chrono::Duration;

/// Lifetime of an issued verification code.
///
/// The code TTL is integrator-supplied configuration; the validation rule
/// itself takes the TTL as a parameter and assumes no default.
#[derive(Clone, Debug)]
pub struct VerificationConfig {
    /// Seconds a code stays valid after issuance (`CODE_TTL_SECONDS`,
    /// default 600)
    pub code_ttl_secs: u64,
}

impl VerificationConfig {
    pub fn from_env() -> Self {
        Self {
            code_ttl_secs: std::env::var("CODE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(600),
        }
    }

    pub fn code_ttl(&self) -> Duration {
        Duration::seconds(self.code_ttl_secs as i64)
    }
}
