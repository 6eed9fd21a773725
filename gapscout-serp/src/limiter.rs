use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tracing::debug;

/// Enforces a minimum spacing between outbound provider calls.
///
/// One limiter is shared (behind an `Arc`) by every client that talks to the
/// same provider, so the spacing holds across keywords and across runs. The
/// lock is held while waiting, which queues callers in arrival order.
///
/// Time comes from `tokio::time`, so tests can drive it with a paused clock.
#[derive(Debug)]
pub struct RateLimiter {
    min_delay: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_delay: Duration) -> Self {
        Self {
            min_delay,
            last_call: Mutex::new(None),
        }
    }

    pub fn min_delay(&self) -> Duration {
        self.min_delay
    }

    /// Wait until the next call is permitted and claim that slot.
    /// Returns the instant the slot was claimed.
    pub async fn acquire(&self) -> Instant {
        let mut last_call = self.last_call.lock().await;

        if let Some(previous) = *last_call {
            let elapsed = previous.elapsed();
            if elapsed < self.min_delay {
                let wait = self.min_delay - elapsed;
                debug!("Rate limiting: waiting {}ms", wait.as_millis());
                sleep(wait).await;
            }
        }

        let now = Instant::now();
        *last_call = Some(now);
        now
    }
}
