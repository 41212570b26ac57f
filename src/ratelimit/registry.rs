//! Registry mapping limiting keys to their counters.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::debug;

use crate::error::{DogHouseError, Result};

use super::window::SlidingWindow;

/// Opaque identifier for the population sharing one quota.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LimitKey(String);

impl LimitKey {
    /// Create a key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl fmt::Display for LimitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LimitKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// Owns the key-to-counter mapping for the admission layer.
///
/// Counters are created lazily on first access and live for the registry's
/// lifetime. The map lock and a counter's internal lock are never held at
/// the same time: lookup releases the map lock before the counter is used.
pub struct LimiterRegistry {
    /// Admissions allowed per window, applied to every new counter
    limit: usize,
    /// Window length applied to every new counter
    window: Duration,
    /// Counters indexed by limiting key
    counters: RwLock<HashMap<LimitKey, Arc<SlidingWindow>>>,
}

impl LimiterRegistry {
    /// Create a new registry.
    ///
    /// Fails on a zero limit or zero window; a limiter that can never
    /// admit (or never evict) is a configuration mistake that must stop
    /// the service at startup.
    pub fn new(limit: usize, window: Duration) -> Result<Self> {
        if limit == 0 {
            return Err(DogHouseError::Config(
                "rate limit must be positive".to_string(),
            ));
        }
        if window.is_zero() {
            return Err(DogHouseError::Config(
                "rate limit window must be positive".to_string(),
            ));
        }

        Ok(Self {
            limit,
            window,
            counters: RwLock::new(HashMap::new()),
        })
    }

    /// Return the counter for `key`, creating it on first access.
    ///
    /// Concurrent first accesses race through `HashMap::entry` under the
    /// write lock, so exactly one counter ever exists per key and no
    /// admission state is lost to a discarded duplicate.
    pub fn get_or_create(&self, key: &LimitKey) -> Arc<SlidingWindow> {
        if let Some(counter) = self.counters.read().unwrap().get(key) {
            return Arc::clone(counter);
        }

        let mut counters = self.counters.write().unwrap();
        Arc::clone(counters.entry(key.clone()).or_insert_with(|| {
            debug!(
                key = %key,
                limit = self.limit,
                window_ms = self.window.as_millis() as u64,
                "Creating new admission counter"
            );
            Arc::new(SlidingWindow::new(self.limit, self.window))
        }))
    }

    /// Get the number of active counters.
    pub fn counter_count(&self) -> usize {
        self.counters.read().unwrap().len()
    }
}
