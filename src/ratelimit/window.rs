//! Sliding-window admission counter.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// A counter that admits at most `limit` requests within any trailing
/// window of the configured length.
///
/// The counter records the timestamps of admitted requests and evicts
/// entries older than the window on every check, so memory never grows
/// past `limit` entries. The evict-check-append sequence runs inside a
/// single critical section, which keeps admissions linearizable for one
/// counter even with many concurrent callers.
pub struct SlidingWindow {
    /// Maximum admissions within the window
    limit: usize,
    /// Window length
    window: Duration,
    /// Timestamps (ms since epoch) of admitted requests, oldest first
    timestamps: Mutex<VecDeque<u64>>,
}

impl SlidingWindow {
    /// Create a new counter.
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            limit,
            window,
            timestamps: Mutex::new(VecDeque::with_capacity(limit)),
        }
    }

    /// Decide whether a request arriving at `now_ms` may be admitted,
    /// recording it if so.
    ///
    /// Entries strictly older than the window are evicted first; an entry
    /// exactly one window old still occupies capacity. Eviction happens on
    /// every call, the append only on admission. `saturating_sub` keeps
    /// small non-monotonic clock jitter from panicking the eviction scan.
    pub fn try_admit(&self, now_ms: u64) -> bool {
        let window_ms = self.window.as_millis() as u64;
        let mut timestamps = self.timestamps.lock().unwrap();

        while timestamps
            .front()
            .is_some_and(|&t| now_ms.saturating_sub(t) > window_ms)
        {
            timestamps.pop_front();
        }

        if timestamps.len() >= self.limit {
            return false;
        }

        timestamps.push_back(now_ms);
        true
    }

    /// Number of admissions still inside the window as of `now_ms`.
    ///
    /// Runs the same eviction as `try_admit` without recording anything.
    pub fn occupancy(&self, now_ms: u64) -> usize {
        let window_ms = self.window.as_millis() as u64;
        let mut timestamps = self.timestamps.lock().unwrap();

        while timestamps
            .front()
            .is_some_and(|&t| now_ms.saturating_sub(t) > window_ms)
        {
            timestamps.pop_front();
        }

        timestamps.len()
    }

    /// Maximum admissions within the window.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Window length.
    pub fn window(&self) -> Duration {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn window(limit: usize) -> SlidingWindow {
        SlidingWindow::new(limit, Duration::from_millis(1000))
    }

    #[test]
    fn test_admits_up_to_limit() {
        let counter = window(2);

        assert!(counter.try_admit(0));
        assert!(counter.try_admit(0));
        assert!(!counter.try_admit(0));
    }

    #[test]
    fn test_window_slides() {
        let counter = window(2);

        assert!(counter.try_admit(0));
        assert!(counter.try_admit(0));
        assert!(!counter.try_admit(0));

        // Both entries are stale at t=1001 and get evicted.
        assert!(counter.try_admit(1001));
    }

    #[test]
    fn test_boundary_entry_still_counts() {
        let counter = window(1);

        assert!(counter.try_admit(0));
        // Exactly one window old: still occupying capacity.
        assert!(!counter.try_admit(1000));
        // One past the window: evicted.
        assert!(counter.try_admit(1001));
    }

    #[test]
    fn test_rejection_does_not_record() {
        let counter = window(2);

        assert!(counter.try_admit(10));
        assert!(counter.try_admit(10));

        for _ in 0..10 {
            assert!(!counter.try_admit(10));
        }
        assert_eq!(counter.occupancy(10), 2);
    }

    #[test]
    fn test_memory_stays_bounded() {
        let counter = window(3);

        for t in 0..10_000u64 {
            counter.try_admit(t);
            assert!(counter.occupancy(t) <= 3);
        }
    }

    #[test]
    fn test_tolerates_clock_jitter() {
        let counter = window(2);

        assert!(counter.try_admit(500));
        // Clock steps slightly backwards; must not panic.
        assert!(counter.try_admit(499));
        assert!(!counter.try_admit(500));
    }

    #[test]
    fn test_capacity_invariant_under_concurrency() {
        let counter = Arc::new(window(5));
        let mut handles = Vec::new();

        for _ in 0..8 {
            let counter = Arc::clone(&counter);
            handles.push(std::thread::spawn(move || {
                let mut admitted = 0usize;
                for _ in 0..100 {
                    if counter.try_admit(1000) {
                        admitted += 1;
                    }
                }
                admitted
            }));
        }

        let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 5);
        assert_eq!(counter.occupancy(1000), 5);
    }

    #[test]
    fn test_accessors() {
        let counter = SlidingWindow::new(7, Duration::from_millis(250));
        assert_eq!(counter.limit(), 7);
        assert_eq!(counter.window(), Duration::from_millis(250));
    }
}
