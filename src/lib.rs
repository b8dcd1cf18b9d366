//! # fmt_logger
//!
//! A type-safe logging facade with per-call-site rate control and automatic
//! source-location capture.
//!
//! ## Features
//!
//! - **Deferred Formatting**: `format!`-style messages, rendered only when a
//!   record is actually emitted
//! - **Rate Control**: `once`, `throttle`, and `on_change` variants for every
//!   severity, with independent state per textual call site
//! - **Source Location**: file, line, and enclosing function captured
//!   implicitly at each call site
//! - **Thread Safe**: call-site state is synchronized; loggers are cheap to
//!   clone and share
//! - **Testable**: pluggable clock and sink make suppression behavior fully
//!   deterministic under test
//!
//! ## Quick start
//!
//! ```
//! use fmt_logger::prelude::*;
//! use fmt_logger::{info, warn_throttle};
//! use std::time::Duration;
//!
//! let logger = Logger::new("app");
//! info!(logger, "started with {} workers", 4).unwrap();
//!
//! for _ in 0..1000 {
//!     warn_throttle!(logger, Duration::from_secs(1), "queue is backed up").unwrap();
//! }
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ChangeDelta, Clock, ClockError, Hertz, LogLevel, LogRecord, Logger, LoggerBuilder,
        LoggerError, ManualClock, Percent, Result, Seconds, Sink, SourceLocation, Stamp,
        SteadyClock, TimeOfDay,
    };
    pub use crate::sinks::{CapturedRecord, ConsoleSink, MemorySink};
}

pub use core::{
    extract_function_name, ChangeDelta, Clock, ClockError, Hertz, LogLevel, LogRecord, Logger,
    LoggerBuilder, LoggerError, ManualClock, OnChangeSite, OnceSite, Percent, Result, Seconds,
    Sink, SourceLocation, Stamp, SteadyClock, ThrottleSite, TimeOfDay,
};
pub use sinks::{CapturedRecord, ConsoleSink, MemorySink};
