//! Clock sources for admission decisions.

use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of wall-clock timestamps in milliseconds.
///
/// Timestamps are expected to be non-decreasing across calls within a
/// process; small jitter is tolerated by the consumers of this trait.
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// System clock backed by `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Manually advanced clock for deterministic tests.
///
/// Clones share the same underlying time value, so advancing one clone
/// is visible to all of them.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<Mutex<u64>>,
}

impl ManualClock {
    /// Create a manual clock starting at `start_ms`.
    pub fn new(start_ms: u64) -> Self {
        Self {
            now_ms: Arc::new(Mutex::new(start_ms)),
        }
    }

    /// Advance the clock by `delta_ms` milliseconds.
    pub fn advance(&self, delta_ms: u64) {
        *self.now_ms.lock().unwrap() += delta_ms;
    }

    /// Set the clock to an absolute time.
    pub fn set(&self, now_ms: u64) {
        *self.now_ms.lock().unwrap() = now_ms;
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        *self.now_ms.lock().unwrap()
    }
}
