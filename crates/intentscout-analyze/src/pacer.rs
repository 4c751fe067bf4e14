//! Minimum-interval limiter for reasoning-model calls

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Enforces a minimum gap between the end of one invocation and the start
/// of the next. Shared state sits behind a mutex so several workers can use
/// one pacer.
#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
    last_finished: Mutex<Option<Instant>>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_finished: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sleep until the interval since the last recorded call has elapsed
    pub async fn wait(&self) {
        let last = *self.last_finished.lock().await;
        if let Some(finished) = last {
            let ready_at = finished + self.interval;
            if ready_at > Instant::now() {
                tracing::debug!(
                    wait_ms = (ready_at - Instant::now()).as_millis() as u64,
                    "pacing reasoning call"
                );
                tokio::time::sleep_until(ready_at).await;
            }
        }
    }

    /// Record that an invocation just completed, successfully or not
    pub async fn mark(&self) {
        *self.last_finished.lock().await = Some(Instant::now());
    }
}
