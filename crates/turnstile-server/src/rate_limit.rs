//! Token-bucket admission control.
//!
//! One global bucket shared by every caller of the guarded endpoint. A noisy
//! client can exhaust the budget for everyone; that is the documented
//! behavior of this limiter, not a bug. State lives in process memory and is
//! lost on restart.

use std::sync::Mutex;
use std::time::Instant;
use turnstile_core::RateLimitConfig;

/// A token bucket with fixed capacity and refill rate.
///
/// The bucket starts full. Each admission consumes one token; tokens refill
/// continuously at the configured rate, capped at capacity. An exhausted
/// bucket rejects immediately: there is no queuing and no blocking.
pub struct RateLimiter {
    capacity: f64,
    refill_per_sec: f64,
    state: Mutex<Bucket>,
}

struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

impl RateLimiter {
    /// Create a full bucket from the configured capacity and refill rate.
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            capacity: f64::from(config.capacity),
            refill_per_sec: f64::from(config.refill_per_sec),
            state: Mutex::new(Bucket {
                tokens: f64::from(config.capacity),
                last_refill: Instant::now(),
            }),
        }
    }

    /// Atomic check-and-decrement: admit if at least one token is available.
    ///
    /// Safe under concurrent invocation; the lock makes refill and decrement
    /// a single step, so simultaneous callers can neither double-admit nor
    /// lose a token.
    pub fn allow(&self) -> bool {
        self.allow_at(Instant::now())
    }

    // Clock-injectable core so tests can drive time forward synthetically.
    fn allow_at(&self, now: Instant) -> bool {
        let mut bucket = self.state.lock().unwrap();

        let elapsed = now.saturating_duration_since(bucket.last_refill).as_secs_f64();
        bucket.tokens = (bucket.tokens + elapsed * self.refill_per_sec).min(self.capacity);
        bucket.last_refill = now;

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}
