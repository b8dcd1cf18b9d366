//! Display adapters for domain time types
//!
//! Message formatting itself is `format_args!`; these adapters make the
//! time-like types render naturally inside any pattern. Each honors the
//! standard `{:.N}` precision spec and delegates width/fill/alignment to
//! `Formatter::pad`, so `"{:>10.2}"` behaves like it would for a number.

use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

/// Duration rendered as fractional seconds with an `s` suffix.
///
/// # Examples
///
/// ```
/// use fmt_logger::core::Seconds;
/// use std::time::Duration;
///
/// let cycle = Seconds(Duration::from_millis(800));
/// assert_eq!(format!("{}", cycle), "0.8s");
/// assert_eq!(format!("{:.3}", cycle), "0.800s");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seconds(pub Duration);

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.0.as_secs_f64();
        let text = match f.precision() {
            Some(precision) => format!("{:.*}s", precision, seconds),
            None => format!("{}s", seconds),
        };
        f.pad(&text)
    }
}

/// Absolute timestamp rendered as a calendar date-time.
///
/// # Examples
///
/// ```
/// use fmt_logger::core::Stamp;
/// use chrono::{TimeZone, Utc};
///
/// let t = Stamp(Utc.with_ymd_and_hms(2026, 2, 24, 8, 59, 17).unwrap());
/// assert_eq!(format!("{}", t), "2026-02-24 08:59:17");
/// assert_eq!(format!("{}", t.time_of_day()), "08:59:17");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp(pub DateTime<Utc>);

impl Stamp {
    /// Timestamp built from nanoseconds since the Unix epoch.
    pub fn from_unix_nanos(nanos: i64) -> Self {
        Self(DateTime::from_timestamp_nanos(nanos))
    }

    /// Sub-format rendering only the time of day.
    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay(self.0)
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

/// Time-of-day sub-format of a [`Stamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay(DateTime<Utc>);

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.format("%H:%M:%S").to_string())
    }
}

/// A rate, stored as its period and rendered as hertz with a `Hz` suffix.
///
/// The numeric format spec applies to the hertz value before the suffix is
/// appended. The conversion is `1 / period` in floating-point seconds; a
/// zero period renders as `inf` per IEEE-754, it is not separately guarded.
///
/// # Examples
///
/// ```
/// use fmt_logger::core::Hertz;
///
/// let rate = Hertz::from_hz(10.0);
/// assert_eq!(format!("{}", rate), "10Hz");
/// assert_eq!(format!("{:.2}", rate), "10.00Hz");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hertz {
    period: Duration,
}

impl Hertz {
    /// Rate with the given cycle period.
    pub fn from_period(period: Duration) -> Self {
        Self { period }
    }

    /// Rate with the given frequency in hertz.
    pub fn from_hz(hz: f64) -> Self {
        Self {
            period: Duration::from_secs_f64(1.0 / hz),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Frequency in hertz as `1 / period`.
    pub fn hz(&self) -> f64 {
        1.0 / self.period.as_secs_f64()
    }
}

impl fmt::Display for Hertz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hz = self.hz();
        let text = match f.precision() {
            Some(precision) => format!("{:.*}Hz", precision, hz),
            None => format!("{}Hz", hz),
        };
        f.pad(&text)
    }
}

/// Fraction rendered as a percentage with a `%` suffix.
///
/// # Examples
///
/// ```
/// use fmt_logger::core::Percent;
///
/// assert_eq!(format!("{:.1}", Percent(0.125)), "12.5%");
/// assert_eq!(format!("{}", Percent(0.5)), "50%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent(pub f64);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scaled = self.0 * 100.0;
        let text = match f.precision() {
            Some(precision) => format!("{:.*}%", precision, scaled),
            None => format!("{}%", scaled),
        };
        f.pad(&text)
    }
}
