use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::email::EmailConfig;
use crate::config::jwt::JwtConfig;
use crate::config::rate_limit::RateLimitConfig;
use crate::config::verification::VerificationConfig;
use crate::modules::verification::store::CodeStore;
use crate::utils::email::Notifier;
use crate::utils::rate_limit::AttemptLimiter;

/// Shared application state: configuration plus the injected
/// collaborators (notifier, issued-code store, per-operation limiters).
///
/// Everything stateful is an explicit field here rather than
/// process-wide state, so tests can substitute their own instances and
/// concurrent apps never share bookkeeping by accident.
#[derive(Clone)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub verification_config: VerificationConfig,
    pub notifier: Notifier,
    pub codes: Arc<CodeStore>,
    pub code_limiter: Arc<AttemptLimiter>,
    pub scan_limiter: Arc<AttemptLimiter>,
}

pub fn init_app_state() -> AppState {
    let email_config = EmailConfig::from_env();
    let rate_limit_config = RateLimitConfig::from_env();

    AppState {
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        verification_config: VerificationConfig::from_env(),
        notifier: Notifier::from_config(&email_config),
        codes: Arc::new(CodeStore::new()),
        code_limiter: Arc::new(AttemptLimiter::new(
            rate_limit_config.code_request_interval(),
        )),
        scan_limiter: Arc::new(AttemptLimiter::new(rate_limit_config.scan_interval())),
    }
}
