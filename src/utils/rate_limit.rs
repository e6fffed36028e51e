use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter};

/// Keyed attempt throttle: one admitted call per key per interval.
///
/// Each throttled operation owns its own limiter, constructed from
/// configuration and injected through `AppState`. The per-key bookkeeping
/// lives entirely inside the governor store; a concurrent
/// read-then-decide race on the same key may admit slightly more than
/// the nominal rate, which callers tolerate.
pub struct AttemptLimiter {
    limiter: RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>,
}

impl AttemptLimiter {
    pub fn new(min_interval: Duration) -> Self {
        let quota = Quota::with_period(min_interval).expect("throttle interval must be non-zero");
        Self {
            limiter: RateLimiter::keyed(quota),
        }
    }

    /// Record an attempt for `key` and report whether it may proceed.
    /// Callers must fail fast on `false` rather than proceeding.
    pub fn should_allow(&self, key: &str) -> bool {
        self.limiter.check_key(&key.to_string()).is_ok()
    }
}
