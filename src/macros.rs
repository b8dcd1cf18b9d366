//! Logging macros with implicit source location and per-call-site state.
//!
//! These macros are the public surface of the dispatcher: one macro per
//! (severity x rate-control mode) combination, each with `format!`-style
//! argument handling. Every expansion captures the calling file, line, and
//! enclosing function automatically, and the rate-controlled variants plant
//! one static state cell per call site, so "once", "throttle", and
//! "on change" are scoped to the textual call location for the life of the
//! process.
//!
//! # Examples
//!
//! ```
//! use fmt_logger::prelude::*;
//! use fmt_logger::{info, warn_throttle, error_once};
//! use std::time::Duration;
//!
//! let logger = Logger::new("server");
//!
//! info!(logger, "listening on port {}", 8080).unwrap();
//!
//! for _ in 0..100 {
//!     // At most one line per second, no matter how hot the loop is.
//!     warn_throttle!(logger, Duration::from_secs(1), "queue depth high").unwrap();
//!     // At most one line ever.
//!     error_once!(logger, "fallback path taken").unwrap();
//! }
//! ```

/// Capture the full path of the enclosing function.
///
/// Works by naming a local item and asking for its `type_name`, then
/// stripping the item's own trailing segment.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __here() {}
        fn __path_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let __path = __path_of(__here);
        &__path[..__path.len() - "::__here".len()]
    }};
}

/// Capture the source location of the call expression.
///
/// Expands to a [`SourceLocation`](crate::core::SourceLocation) holding the
/// calling file, line, and fully qualified enclosing-function path.
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::core::SourceLocation::new(
            ::core::file!(),
            ::core::line!(),
            $crate::__function_path!(),
        )
    };
}

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use fmt_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use fmt_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(
            $level,
            $crate::source_location!(),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Log a message the first time this call site executes, then never again.
///
/// Uniqueness is per textual call site: two different lines with identical
/// text are tracked independently, and argument values play no part.
///
/// # Examples
///
/// ```
/// # use fmt_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use fmt_logger::log_once;
/// for attempt in 0..5 {
///     log_once!(logger, LogLevel::Warn, "retrying (attempt {})", attempt).unwrap();
/// }
/// ```
#[macro_export]
macro_rules! log_once {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        static __SITE: $crate::core::OnceSite = $crate::core::OnceSite::new();
        $logger.log_once(
            &__SITE,
            $level,
            $crate::source_location!(),
            ::core::format_args!($($arg)+),
        )
    }};
}

/// Log a message at most once per `interval` from this call site.
///
/// The window is measured on the logger's clock from the last emission; the
/// first invocation always emits.
///
/// # Examples
///
/// ```
/// # use fmt_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use fmt_logger::log_throttle;
/// use std::time::Duration;
/// log_throttle!(logger, LogLevel::Info, Duration::from_millis(100), "tick").unwrap();
/// ```
#[macro_export]
macro_rules! log_throttle {
    ($logger:expr, $level:expr, $interval:expr, $($arg:tt)+) => {{
        static __SITE: $crate::core::ThrottleSite = $crate::core::ThrottleSite::new();
        $logger.log_throttle(
            &__SITE,
            $interval,
            $level,
            $crate::source_location!(),
            ::core::format_args!($($arg)+),
        )
    }};
}

/// Log a message when the monitored value changes.
///
/// The value only needs `PartialEq`. The first observation records the
/// baseline silently; afterwards the message fires whenever the value differs
/// from the baseline. For a numeric dead band use
/// [`log_on_change_by!`](crate::log_on_change_by).
///
/// # Examples
///
/// ```
/// # use fmt_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use fmt_logger::log_on_change;
///
/// let state = "connected";
/// log_on_change!(logger, LogLevel::Info, state, "state: {}", state).unwrap();
/// ```
#[macro_export]
macro_rules! log_on_change {
    ($logger:expr, $level:expr, $value:expr, $($arg:tt)+) => {{
        static __SITE: $crate::core::OnChangeSite = $crate::core::OnChangeSite::new();
        $logger.log_on_change(
            &__SITE,
            &$value,
            $level,
            $crate::source_location!(),
            ::core::format_args!($($arg)+),
        )
    }};
}

/// Log a message when the monitored value moves at least `threshold` away
/// from its baseline.
///
/// The value needs a numeric distance ([`ChangeDelta`](crate::core::ChangeDelta)).
/// The first observation records the baseline silently; afterwards the
/// message fires when `|value - baseline| >= threshold`, and the baseline
/// then advances to the fired value.
///
/// # Examples
///
/// ```
/// # use fmt_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use fmt_logger::log_on_change_by;
///
/// let temperature = 21.5f64;
/// log_on_change_by!(logger, LogLevel::Warn, temperature, 5.0, "temp: {:.1}", temperature).unwrap();
/// ```
#[macro_export]
macro_rules! log_on_change_by {
    ($logger:expr, $level:expr, $value:expr, $threshold:expr, $($arg:tt)+) => {{
        static __SITE: $crate::core::OnChangeSite = $crate::core::OnChangeSite::new();
        $logger.log_on_change_by(
            &__SITE,
            &$value,
            $threshold,
            $level,
            $crate::source_location!(),
            ::core::format_args!($($arg)+),
        )
    }};
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use fmt_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use fmt_logger::debug;
/// debug!(logger, "counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a debug-level message only once per call site.
#[macro_export]
macro_rules! debug_once {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_once!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a debug-level message at most once per interval.
#[macro_export]
macro_rules! debug_throttle {
    ($logger:expr, $interval:expr, $($arg:tt)+) => {
        $crate::log_throttle!($logger, $crate::LogLevel::Debug, $interval, $($arg)+)
    };
}

/// Log a debug-level message when the monitored value changes.
#[macro_export]
macro_rules! debug_on_change {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_on_change!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a debug-level message when the monitored value moves past a threshold.
#[macro_export]
macro_rules! debug_on_change_by {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_on_change_by!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use fmt_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use fmt_logger::info;
/// info!(logger, "application started").unwrap();
/// info!(logger, "processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log an info-level message only once per call site.
///
/// # Examples
///
/// ```
/// # use fmt_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use fmt_logger::info_once;
/// info_once!(logger, "initialization complete").unwrap();
/// ```
#[macro_export]
macro_rules! info_once {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_once!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log an info-level message at most once per interval.
///
/// # Examples
///
/// ```
/// # use fmt_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use fmt_logger::info_throttle;
/// use std::time::Duration;
/// info_throttle!(logger, Duration::from_secs(5), "processed {} items", 42).unwrap();
/// ```
#[macro_export]
macro_rules! info_throttle {
    ($logger:expr, $interval:expr, $($arg:tt)+) => {
        $crate::log_throttle!($logger, $crate::LogLevel::Info, $interval, $($arg)+)
    };
}

/// Log an info-level message when the monitored value changes.
///
/// # Examples
///
/// ```
/// # use fmt_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use fmt_logger::info_on_change;
/// let progress = 0.25f64;
/// // Fires on any change after the first observation.
/// info_on_change!(logger, progress, "progress: {}", progress).unwrap();
/// ```
#[macro_export]
macro_rules! info_on_change {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_on_change!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log an info-level message when the monitored value moves past a threshold.
///
/// # Examples
///
/// ```
/// # use fmt_logger::prelude::*;
/// # let logger = Logger::new("demo");
/// use fmt_logger::info_on_change_by;
/// let progress = 0.25f64;
/// // Fires when the value moves at least 0.1 from the baseline.
/// info_on_change_by!(logger, progress, 0.1, "progress: {}", progress).unwrap();
/// ```
#[macro_export]
macro_rules! info_on_change_by {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_on_change_by!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log a warning-level message only once per call site.
#[macro_export]
macro_rules! warn_once {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_once!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log a warning-level message at most once per interval.
#[macro_export]
macro_rules! warn_throttle {
    ($logger:expr, $interval:expr, $($arg:tt)+) => {
        $crate::log_throttle!($logger, $crate::LogLevel::Warn, $interval, $($arg)+)
    };
}

/// Log a warning-level message when the monitored value changes.
#[macro_export]
macro_rules! warn_on_change {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_on_change!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log a warning-level message when the monitored value moves past a threshold.
#[macro_export]
macro_rules! warn_on_change_by {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_on_change_by!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log an error-level message only once per call site.
#[macro_export]
macro_rules! error_once {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_once!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log an error-level message at most once per interval.
#[macro_export]
macro_rules! error_throttle {
    ($logger:expr, $interval:expr, $($arg:tt)+) => {
        $crate::log_throttle!($logger, $crate::LogLevel::Error, $interval, $($arg)+)
    };
}

/// Log an error-level message when the monitored value changes.
#[macro_export]
macro_rules! error_on_change {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_on_change!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log an error-level message when the monitored value moves past a threshold.
#[macro_export]
macro_rules! error_on_change_by {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_on_change_by!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log a fatal-level message only once per call site.
#[macro_export]
macro_rules! fatal_once {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_once!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log a fatal-level message at most once per interval.
#[macro_export]
macro_rules! fatal_throttle {
    ($logger:expr, $interval:expr, $($arg:tt)+) => {
        $crate::log_throttle!($logger, $crate::LogLevel::Fatal, $interval, $($arg)+)
    };
}

/// Log a fatal-level message when the monitored value changes.
#[macro_export]
macro_rules! fatal_on_change {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_on_change!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log a fatal-level message when the monitored value moves past a threshold.
#[macro_export]
macro_rules! fatal_on_change_by {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_on_change_by!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
