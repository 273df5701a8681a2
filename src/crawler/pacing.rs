//! Request pacing
//!
//! The engine pauses after every fetched URL to bound the request rate to
//! remote hosts. The pause length comes from an injectable policy so that
//! tests can run without sleeping.

use std::time::Duration;

/// Strategy deciding how long to wait after a URL has been processed
pub trait PacingPolicy: Send + Sync {
    /// Delay to apply after processing `url`
    fn delay_after(&self, url: &str) -> Duration;
}

/// Waits the same amount of time after every URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::from_millis(crate::config::DEFAULT_DELAY_MS)
    }
}

impl PacingPolicy for FixedDelay {
    fn delay_after(&self, _url: &str) -> Duration {
        self.delay
    }
}

/// Never waits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDelay;

impl PacingPolicy for NoDelay {
    fn delay_after(&self, _url: &str) -> Duration {
        Duration::ZERO
    }
}

/// Applies the policy's delay for `url`
pub async fn pace(policy: &dyn PacingPolicy, url: &str) {
    let delay = policy.delay_after(url);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
