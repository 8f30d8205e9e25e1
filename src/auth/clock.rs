//! Timestamp source for signed requests.
//!
//! Every signed request carries its unix time in seconds, both in the
//! canonical message and in the `X-SMS-Timestamp` header. The server rejects
//! requests whose timestamp drifts too far from its own clock.

use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing the timestamp of the next request.
pub trait Clock: Send + Sync {
    /// Seconds since the UNIX epoch.
    fn unix_timestamp(&self) -> i64;
}

/// A clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

/// A clock that always returns the same instant.
///
/// Useful for reproducing a signature or pinning requests in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn unix_timestamp(&self) -> i64 {
        self.0
    }
}
