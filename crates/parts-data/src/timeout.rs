//! Timeout configuration for remote catalog sources.

use std::time::Duration;

/// Default total timeout for fetching the catalog document.
pub const DEFAULT_TOTAL_TIMEOUT: Duration = Duration::from_millis(5000);

/// Timeout configuration for a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Connection timeout.
    pub connect: Duration,
    /// Total operation timeout, body included.
    pub total: Duration,
}

impl TimeoutConfig {
    pub fn new(connect: Duration, total: Duration) -> Self {
        Self { connect, total }
    }

    /// Create from a single total timeout; connecting gets a quarter of it.
    pub fn from_total(total: Duration) -> Self {
        Self {
            connect: total / 4,
            total,
        }
    }

    pub fn from_millis(total_ms: u64) -> Self {
        Self::from_total(Duration::from_millis(total_ms))
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self::from_total(DEFAULT_TOTAL_TIMEOUT)
    }
}
