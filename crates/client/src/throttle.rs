//! Call-count rate limiting.
//!
//! The search service throttles bursts of management operations. Before
//! every index call the limiter checks how many calls were made since the
//! last pause; once that reaches the threshold it sleeps for a fixed
//! duration and starts counting again.
//!
//! # Invariants
//! - The counter never exceeds the threshold without a pause.
//! - No jitter and no adaptive backoff: every pause has the same length.

use std::time::Duration;

use tracing::info;

use azsearch_config::ThrottleConfig;

/// Returns `true` when `count` has reached `max` and a pause is due.
pub fn should_pause(count: u32, max: u32) -> bool {
    count >= max
}

/// Returns the counter after recording one more call.
pub fn increment(count: u32) -> u32 {
    count.saturating_add(1)
}

/// Sleep for the configured pause.
pub async fn pause(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Stateful call counter owned by a single deployment run.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    max_calls: u32,
    pause: Duration,
    count: u32,
    pauses: u32,
}

impl RateLimiter {
    /// Create a limiter pausing for `pause` after every `max_calls` calls.
    ///
    /// A zero threshold is raised to one.
    pub fn new(max_calls: u32, pause: Duration) -> Self {
        Self {
            max_calls: max_calls.max(1),
            pause,
            count: 0,
            pauses: 0,
        }
    }

    pub fn from_config(config: &ThrottleConfig) -> Self {
        Self::new(config.max_call_count, config.pause)
    }

    /// Account for one outbound call, pausing first if the threshold is reached.
    ///
    /// Returns `true` if a pause was taken.
    pub async fn acquire(&mut self) -> bool {
        let paused = if should_pause(self.count, self.max_calls) {
            info!(
                calls = self.count,
                pause_secs = self.pause.as_secs(),
                "Call limit reached, pausing"
            );
            pause(self.pause).await;
            self.count = 0;
            self.pauses += 1;
            true
        } else {
            false
        };
        self.count = increment(self.count);
        paused
    }

    /// Calls made since the last pause.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Pauses taken so far.
    pub fn pauses(&self) -> u32 {
        self.pauses
    }
}
