use std::time::Duration;

/// Minimum spacing between repeated attempts, per throttled operation.
///
/// Each interval feeds one keyed limiter injected through `AppState`;
/// the throttled entry points are code requests and pass scans.
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    /// Seconds a destination must wait between verification code requests
    pub code_request_interval_secs: u64,
    /// Seconds a caller must wait between pass token scans
    pub scan_interval_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            code_request_interval_secs: 60,
            scan_interval_secs: 2,
        }
    }
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            code_request_interval_secs: std::env::var("CODE_REQUEST_INTERVAL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            scan_interval_secs: std::env::var("SCAN_INTERVAL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
        }
    }

    pub fn code_request_interval(&self) -> Duration {
        Duration::from_secs(self.code_request_interval_secs.max(1))
    }

    pub fn scan_interval(&self) -> Duration {
        Duration::from_secs(self.scan_interval_secs.max(1))
    }
}
