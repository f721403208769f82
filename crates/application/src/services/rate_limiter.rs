use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::ports::Clock;

const NEVER: u64 = u64::MAX;

/// Enforces a minimum interval between accepted calls.
///
/// The last accepted timestamp is swapped in with compare-and-swap, so concurrent
/// callers can never both be accepted inside one interval.
pub struct RateLimiter {
    clock: Arc<dyn Clock>,
    min_interval_ms: u64,
    last_accepted_ms: AtomicU64,
}

impl RateLimiter {
    pub fn new(clock: Arc<dyn Clock>, min_interval: Duration) -> Self {
        Self {
            clock,
            min_interval_ms: u64::try_from(min_interval.as_millis()).unwrap_or(u64::MAX),
            last_accepted_ms: AtomicU64::new(NEVER),
        }
    }

    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }

    /// Returns `true` and records the call when at least the minimum interval has
    /// passed since the last accepted one. A rejected call leaves the state untouched.
    pub fn try_acquire(&self) -> bool {
        let now = self.clock.now_millis();
        let mut last = self.last_accepted_ms.load(Ordering::Acquire);

        loop {
            if last != NEVER {
                let elapsed = now.saturating_sub(last);
                if elapsed < self.min_interval_ms {
                    debug!(elapsed_ms = elapsed, "Rate limit hit");
                    return false;
                }
            }

            match self.last_accepted_ms.compare_exchange_weak(
                last,
                now,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(actual) => last = actual,
            }
        }
    }
}
