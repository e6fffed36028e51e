use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;
use wardpass::config::cors::CorsConfig;
use wardpass::config::jwt::JwtConfig;
use wardpass::config::verification::VerificationConfig;
use wardpass::middleware::role::UserRole;
use wardpass::modules::verification::store::CodeStore;
use wardpass::state::AppState;
use wardpass::utils::email::Notifier;
use wardpass::utils::jwt::create_access_token;
use wardpass::utils::rate_limit::AttemptLimiter;

#[allow(dead_code)]
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

/// Test state with the no-op notifier and generous throttle windows.
/// Keep a clone of the returned state to inspect the code store.
#[allow(dead_code)]
pub fn test_state() -> AppState {
    test_state_with(600, Duration::from_secs(60), Duration::from_secs(60))
}

#[allow(dead_code)]
pub fn test_state_with(
    code_ttl_secs: u64,
    code_interval: Duration,
    scan_interval: Duration,
) -> AppState {
    AppState {
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        verification_config: VerificationConfig { code_ttl_secs },
        notifier: Notifier::Noop,
        codes: Arc::new(CodeStore::new()),
        code_limiter: Arc::new(AttemptLimiter::new(code_interval)),
        scan_limiter: Arc::new(AttemptLimiter::new(scan_interval)),
    }
}

#[allow(dead_code)]
pub fn bearer_header(role: UserRole, email: &str) -> String {
    let token = create_access_token(Uuid::new_v4(), email, role, &test_jwt_config()).unwrap();
    format!("Bearer {}", token)
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
