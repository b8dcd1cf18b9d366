//! Per-call-site rate-control state
//!
//! Each rate-controlled macro expansion plants one `static` state cell at its
//! call site, so every distinct textual call owns independent state for the
//! life of the process. The cells are never reclaimed. All read-modify-write
//! paths are serialized (atomic swap or mutex), so two threads racing through
//! the same call site can never both observe the emit-enabling state.

use parking_lot::Mutex;
use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// State cell for `*_once!` call sites.
///
/// The flag never reverts once set.
#[derive(Debug)]
pub struct OnceSite {
    already_logged: AtomicBool,
}

impl OnceSite {
    pub const fn new() -> Self {
        Self {
            already_logged: AtomicBool::new(false),
        }
    }

    /// Atomically claim the single emission. Returns `true` exactly once.
    pub fn try_claim(&self) -> bool {
        !self.already_logged.swap(true, Ordering::Relaxed)
    }

    pub fn has_logged(&self) -> bool {
        self.already_logged.load(Ordering::Relaxed)
    }
}

impl Default for OnceSite {
    fn default() -> Self {
        Self::new()
    }
}

/// State cell for `*_throttle!` call sites.
///
/// Holds the timestamp of the last emission on the owning logger's clock
/// timeline. `None` means "never emitted" and always satisfies the elapsed
/// test. The timestamp advances only on emission, so the throttle window is
/// measured from the last emission, not the last attempt.
#[derive(Debug)]
pub struct ThrottleSite {
    last_emit: Mutex<Option<Duration>>,
}

impl ThrottleSite {
    pub const fn new() -> Self {
        Self {
            last_emit: Mutex::new(None),
        }
    }

    /// Claim an emission slot if at least `interval` has elapsed since the
    /// last one. A backwards clock reading suppresses until time catches up.
    pub fn try_claim(&self, now: Duration, interval: Duration) -> bool {
        let mut last_emit = self.last_emit.lock();
        match *last_emit {
            Some(previous) if now.saturating_sub(previous) < interval => false,
            _ => {
                *last_emit = Some(now);
                true
            }
        }
    }

    pub fn last_emit(&self) -> Option<Duration> {
        *self.last_emit.lock()
    }
}

impl Default for ThrottleSite {
    fn default() -> Self {
        Self::new()
    }
}

/// Distance metric for thresholded on-change sites.
///
/// Absolute difference mapped to `f64`, implemented for the primitive
/// numerics. Integer deltas go through `abs_diff` so the difference itself is
/// exact; only the final `f64` conversion rounds, for deltas above 2^53.
/// Types without a meaningful distance cannot use the thresholded variant;
/// the plain variant only needs `PartialEq`.
pub trait ChangeDelta {
    fn delta(&self, other: &Self) -> f64;
}

macro_rules! impl_change_delta_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl ChangeDelta for $t {
                fn delta(&self, other: &Self) -> f64 {
                    (*self as f64 - *other as f64).abs()
                }
            }
        )*
    };
}

macro_rules! impl_change_delta_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl ChangeDelta for $t {
                fn delta(&self, other: &Self) -> f64 {
                    self.abs_diff(*other) as f64
                }
            }
        )*
    };
}

impl_change_delta_float!(f32, f64);
impl_change_delta_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// State cell for `*_on_change!` call sites.
///
/// Stores the last observed value type-erased, because a `static` planted by
/// a macro expansion cannot be generic over the monitored type. A call site
/// normally sees a single type; if a generic caller routes a second type
/// through the same site, the type switch counts as a change.
#[derive(Debug)]
pub struct OnChangeSite {
    last_value: Mutex<Option<Box<dyn Any + Send>>>,
}

impl OnChangeSite {
    pub const fn new() -> Self {
        Self {
            last_value: Mutex::new(None),
        }
    }

    /// Record `value` and report whether it differs from the baseline.
    ///
    /// The first observation establishes the baseline and returns `false`.
    pub fn observe<T>(&self, value: &T) -> bool
    where
        T: PartialEq + Clone + Send + 'static,
    {
        let mut last_value = self.last_value.lock();
        let changed = match last_value.as_deref() {
            None => None,
            Some(previous) => match previous.downcast_ref::<T>() {
                Some(previous) => Some(previous != value),
                None => Some(true),
            },
        };
        match changed {
            // First observation: baseline only, never emit.
            None => {
                *last_value = Some(Box::new(value.clone()));
                false
            }
            Some(false) => false,
            Some(true) => {
                *last_value = Some(Box::new(value.clone()));
                true
            }
        }
    }

    /// Record `value` and report whether it moved at least `threshold` away
    /// from the baseline.
    ///
    /// The baseline advances exactly when the predicate fires (first
    /// observation or emission), so sub-threshold drift is always measured
    /// against the last value that fired.
    pub fn observe_beyond<T>(&self, value: &T, threshold: f64) -> bool
    where
        T: ChangeDelta + Clone + Send + 'static,
    {
        let mut last_value = self.last_value.lock();
        let beyond = match last_value.as_deref() {
            None => None,
            Some(previous) => match previous.downcast_ref::<T>() {
                Some(previous) => Some(previous.delta(value) >= threshold),
                None => Some(true),
            },
        };
        match beyond {
            None => {
                *last_value = Some(Box::new(value.clone()));
                false
            }
            Some(false) => false,
            Some(true) => {
                *last_value = Some(Box::new(value.clone()));
                true
            }
        }
    }

    pub fn has_baseline(&self) -> bool {
        self.last_value.lock().is_some()
    }
}

impl Default for OnChangeSite {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    #[test]
    fn test_once_claims_exactly_once() {
        let site = OnceSite::new();
        assert!(!site.has_logged());
        assert!(site.try_claim());
        assert!(!site.try_claim());
        assert!(!site.try_claim());
        assert!(site.has_logged());
    }

    #[test]
    fn test_once_concurrent_single_winner() {
        let site = Arc::new(OnceSite::new());
        let wins = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let site = Arc::clone(&site);
                let wins = Arc::clone(&wins);
                std::thread::spawn(move || {
                    if site.try_claim() {
                        wins.fetch_add(1, Ordering::Relaxed);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(wins.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_throttle_first_claim_always_wins() {
        let site = ThrottleSite::new();
        assert_eq!(site.last_emit(), None);
        assert!(site.try_claim(Duration::ZERO, Duration::from_secs(10)));
        assert_eq!(site.last_emit(), Some(Duration::ZERO));
    }

    #[test]
    fn test_throttle_window_measured_from_last_emission() {
        let site = ThrottleSite::new();
        let interval = Duration::from_millis(10);

        assert!(site.try_claim(Duration::ZERO, interval));
        // Suppressed attempts must not slide the window forward.
        assert!(!site.try_claim(Duration::from_millis(6), interval));
        assert!(!site.try_claim(Duration::from_millis(9), interval));
        assert!(site.try_claim(Duration::from_millis(10), interval));
        assert_eq!(site.last_emit(), Some(Duration::from_millis(10)));
    }

    #[test]
    fn test_throttle_backwards_clock_suppresses() {
        let site = ThrottleSite::new();
        let interval = Duration::from_millis(10);
        assert!(site.try_claim(Duration::from_secs(5), interval));
        assert!(!site.try_claim(Duration::from_secs(1), interval));
        assert!(site.try_claim(Duration::from_secs(6), interval));
    }

    #[test]
    fn test_on_change_first_observation_silent() {
        let site = OnChangeSite::new();
        assert!(!site.has_baseline());
        assert!(!site.observe(&100));
        assert!(site.has_baseline());
    }

    #[test]
    fn test_on_change_detects_transitions() {
        let site = OnChangeSite::new();
        assert!(!site.observe(&100));
        assert!(!site.observe(&100));
        assert!(site.observe(&200));
        assert!(!site.observe(&200));
        assert!(site.observe(&100));
    }

    #[test]
    fn test_on_change_type_switch_counts_as_change() {
        let site = OnChangeSite::new();
        assert!(!site.observe(&1i32));
        assert!(site.observe(&1i64));
    }

    #[test]
    fn test_on_change_threshold_baseline_advances_on_fire() {
        let site = OnChangeSite::new();
        let threshold = 5.0;

        assert!(!site.observe_beyond(&20.0f64, threshold)); // baseline
        assert!(!site.observe_beyond(&24.0f64, threshold)); // delta 4.0 from 20.0
        assert!(site.observe_beyond(&25.5f64, threshold)); // delta 5.5 from 20.0
        assert!(!site.observe_beyond(&27.0f64, threshold)); // delta 1.5 from 25.5
        assert!(site.observe_beyond(&31.0f64, threshold)); // delta 5.5 from 25.5
    }

    #[test]
    fn test_change_delta_is_absolute() {
        assert_eq!(10i32.delta(&4), 6.0);
        assert_eq!(4i32.delta(&10), 6.0);
        assert_eq!(2.5f64.delta(&2.5), 0.0);
        assert_eq!(3u8.delta(&250), 247.0);
    }

    #[test]
    fn test_change_delta_exact_for_large_integers() {
        // Differences are taken before the f64 conversion, so neighbors at
        // the top of the u64/i64 range still report a nonzero delta.
        assert_eq!(u64::MAX.delta(&(u64::MAX - 1)), 1.0);
        assert_eq!(i64::MAX.delta(&(i64::MAX - 2)), 2.0);
        assert_eq!(i64::MIN.delta(&i64::MAX), u64::MAX as f64);
    }
}
