//! Backoff policy for transient backend overload.

use std::time::Duration;

/// Exponential backoff with jitter, capped.
///
/// Delay for attempt `n` (0-based) is `min(base * 2^n + rand(0..jitter), max)`.
/// Defaults match the production policy: 1 s base doubling per attempt, up to
/// 300 ms of jitter, 5 s cap, 3 retries (4 total attempts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the initial attempt.
    pub max_retries: u32,
    /// Delay before the first retry, doubled each attempt.
    pub base_delay: Duration,
    /// Upper bound applied after jitter.
    pub max_delay: Duration,
    /// Random jitter added per delay, `0..jitter`.
    pub jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(5),
            jitter: Duration::from_millis(300),
        }
    }
}

impl RetryPolicy {
    /// A policy with no waiting between attempts. Retry counts still apply;
    /// intended for tests.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            jitter: Duration::ZERO,
        }
    }

    /// Total attempts including the initial one.
    #[must_use]
    pub const fn total_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// Backoff delay before retrying after attempt `attempt` (0-based).
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponential = self
            .base_delay
            .saturating_mul(2u32.saturating_pow(attempt.min(16)));
        let jitter_ms = u64::try_from(self.jitter.as_millis()).unwrap_or(u64::MAX);
        let jitter = if jitter_ms == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(rand::random_range(0..jitter_ms))
        };
        exponential.saturating_add(jitter).min(self.max_delay)
    }
}
