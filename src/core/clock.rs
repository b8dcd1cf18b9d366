//! Clock abstraction for throttle timing
//!
//! Throttled call sites measure elapsed time on the clock owned by their
//! [`Logger`](crate::Logger), not on wall time directly. Injecting a
//! [`ManualClock`] makes throttle behavior fully deterministic in tests and
//! supports externally driven (simulation) time.

use parking_lot::Mutex;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

/// Reading the current time failed.
///
/// Happens with externally driven clocks that have not yet received an
/// authoritative time. The dispatcher recovers from this by emitting the
/// throttled message unconditionally (fail open).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("clock read failed: {reason}")]
pub struct ClockError {
    pub reason: String,
}

impl ClockError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Time source for throttled logging.
///
/// `now()` returns the elapsed time on this clock's own timeline. Only
/// differences between readings are meaningful; the epoch is clock-specific.
pub trait Clock: Send + Sync {
    fn now(&self) -> Result<Duration, ClockError>;
}

// Shared anchor so every SteadyClock reads the same process-wide timeline.
static PROCESS_EPOCH: OnceLock<Instant> = OnceLock::new();

/// Monotonic clock backed by `Instant`, anchored to a process-wide epoch.
///
/// This is the default clock for loggers constructed without an explicit one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteadyClock;

impl SteadyClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SteadyClock {
    fn now(&self) -> Result<Duration, ClockError> {
        Ok(PROCESS_EPOCH.get_or_init(Instant::now).elapsed())
    }
}

/// Hand-driven clock for deterministic tests.
///
/// Clones share the same underlying time value, so a test can keep one handle
/// and give another to a [`Logger`](crate::Logger). Time only moves when
/// `advance` or `set` is called. `set_error` makes subsequent reads fail,
/// simulating a time source that has not been initialized yet.
///
/// # Examples
///
/// ```
/// use fmt_logger::core::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// assert_eq!(clock.now().unwrap(), Duration::ZERO);
///
/// clock.advance(Duration::from_millis(10));
/// assert_eq!(clock.now().unwrap(), Duration::from_millis(10));
///
/// clock.set_error("no time received yet");
/// assert!(clock.now().is_err());
/// clock.clear_error();
/// assert!(clock.now().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    inner: Arc<Mutex<ManualClockState>>,
}

#[derive(Debug, Default)]
struct ManualClockState {
    now: Duration,
    error: Option<String>,
}

impl ManualClock {
    /// Create a manual clock starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manual clock starting at a specific offset.
    pub fn starting_at(now: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ManualClockState { now, error: None })),
        }
    }

    /// Advance the clock by a duration.
    pub fn advance(&self, duration: Duration) {
        self.inner.lock().now += duration;
    }

    /// Set the clock to a specific offset.
    pub fn set(&self, now: Duration) {
        self.inner.lock().now = now;
    }

    /// Make all subsequent reads fail with the given reason.
    pub fn set_error(&self, reason: impl Into<String>) {
        self.inner.lock().error = Some(reason.into());
    }

    /// Restore normal reads after `set_error`.
    pub fn clear_error(&self) {
        self.inner.lock().error = None;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Result<Duration, ClockError> {
        let state = self.inner.lock();
        match &state.error {
            Some(reason) => Err(ClockError::new(reason.clone())),
            None => Ok(state.now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_clock_advances() {
        let clock = SteadyClock::new();
        let t1 = clock.now().unwrap();
        std::thread::sleep(Duration::from_millis(5));
        let t2 = clock.now().unwrap();
        assert!(t2 > t1);
    }

    #[test]
    fn test_steady_clocks_share_timeline() {
        let a = SteadyClock::new();
        let b = SteadyClock::new();
        let ta = a.now().unwrap();
        let tb = b.now().unwrap();
        // Both anchored to the same process epoch, so readings are comparable.
        assert!(tb >= ta);
    }

    #[test]
    fn test_manual_clock_control() {
        let clock = ManualClock::starting_at(Duration::from_secs(1));
        assert_eq!(clock.now().unwrap(), Duration::from_secs(1));

        clock.advance(Duration::from_secs(2));
        assert_eq!(clock.now().unwrap(), Duration::from_secs(3));

        clock.set(Duration::from_millis(500));
        assert_eq!(clock.now().unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(Duration::from_secs(7));
        assert_eq!(clock.now().unwrap(), Duration::from_secs(7));
    }

    #[test]
    fn test_manual_clock_error() {
        let clock = ManualClock::new();
        clock.set_error("sim time not published");
        let err = clock.now().unwrap_err();
        assert_eq!(err.reason, "sim time not published");
        assert!(err.to_string().contains("clock read failed"));

        clock.clear_error();
        assert_eq!(clock.now().unwrap(), Duration::ZERO);
    }
}
