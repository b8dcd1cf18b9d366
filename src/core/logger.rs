//! Main logger implementation
//!
//! `Logger` is the rate-controlled dispatcher: it owns a name, the clock used
//! for throttle timing, and the sink that records messages. Every dispatch
//! path consults the sink's severity gate first; rate-control state is only
//! touched, the clock only read, and the message only rendered once the
//! severity is known to be enabled.

use super::{
    clock::{Clock, SteadyClock},
    error::{LoggerError, Result},
    location::SourceLocation,
    log_level::LogLevel,
    log_record::LogRecord,
    sink::Sink,
    site::{ChangeDelta, OnChangeSite, OnceSite, ThrottleSite},
};
use crate::sinks::ConsoleSink;
use std::fmt::{self, Write as _};
use std::sync::Arc;
use std::time::Duration;

/// Rate-controlled, fmt-style logger.
///
/// Cheap to clone; clones share the same name, clock, and sink. Use the
/// logging macros rather than the `log_*` methods directly, so source
/// location and per-call-site state are stitched in automatically.
///
/// # Example
///
/// ```
/// use fmt_logger::prelude::*;
/// use fmt_logger::info;
///
/// let logger = Logger::new("demo");
/// info!(logger, "listening on port {}", 8080).unwrap();
/// ```
#[derive(Clone)]
pub struct Logger {
    name: Arc<str>,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Create a logger with the default console sink and the process-wide
    /// steady clock.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            clock: Arc::new(SteadyClock::new()),
            sink: Arc::new(ConsoleSink::new()),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use fmt_logger::prelude::*;
    ///
    /// let logger = Logger::builder("sensors")
    ///     .clock(ManualClock::new())
    ///     .sink(MemorySink::new())
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(logger.name(), "sensors");
    /// ```
    pub fn builder(name: impl Into<Arc<str>>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the sink would record this severity for this logger.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.sink.is_enabled(&self.name, level)
    }

    /// Plain emit: format and forward, subject only to severity gating.
    pub fn log(
        &self,
        level: LogLevel,
        location: SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        self.emit(level, location, args)
    }

    /// Emit the first time this call site's `site` is claimed, then suppress
    /// forever. Uniqueness is per call site, regardless of argument values.
    pub fn log_once(
        &self,
        site: &OnceSite,
        level: LogLevel,
        location: SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        if site.try_claim() {
            self.emit(level, location, args)?;
        }
        Ok(())
    }

    /// Emit at most once per `interval`, measured on this logger's clock from
    /// the last actual emission. The first invocation always emits.
    ///
    /// A clock read failure is recovered locally: the failure is reported at
    /// ERROR severity through the same sink, then the requested message is
    /// emitted unconditionally rather than silently dropped.
    pub fn log_throttle(
        &self,
        site: &ThrottleSite,
        interval: Duration,
        level: LogLevel,
        location: SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        match self.clock.now() {
            Ok(now) => {
                if site.try_claim(now, interval) {
                    self.emit(level, location, args)?;
                }
                Ok(())
            }
            Err(err) => {
                if self.is_enabled(LogLevel::Error) {
                    self.emit(LogLevel::Error, location, format_args!("{}", err))?;
                }
                self.emit(level, location, args)
            }
        }
    }

    /// Emit when `value` differs from the last observation at this call site.
    /// The first observation only records the baseline and never emits.
    pub fn log_on_change<T>(
        &self,
        site: &OnChangeSite,
        value: &T,
        level: LogLevel,
        location: SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> Result<()>
    where
        T: PartialEq + Clone + Send + 'static,
    {
        if !self.is_enabled(level) {
            return Ok(());
        }
        if site.observe(value) {
            self.emit(level, location, args)?;
        }
        Ok(())
    }

    /// Emit when `value` differs from the baseline by at least `threshold`
    /// (absolute difference). The first observation never emits.
    pub fn log_on_change_by<T>(
        &self,
        site: &OnChangeSite,
        value: &T,
        threshold: f64,
        level: LogLevel,
        location: SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> Result<()>
    where
        T: ChangeDelta + Clone + Send + 'static,
    {
        if !self.is_enabled(level) {
            return Ok(());
        }
        if site.observe_beyond(value, threshold) {
            self.emit(level, location, args)?;
        }
        Ok(())
    }

    /// Render the deferred arguments and hand the record to the sink.
    fn emit(
        &self,
        level: LogLevel,
        location: SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        let mut message = String::new();
        message.write_fmt(args).map_err(LoggerError::Format)?;

        let record = LogRecord {
            logger: &self.name,
            level,
            file: location.file,
            line: location.line,
            function: location.function_name(),
            message: &message,
        };
        self.sink.emit(&record);
        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.name).finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use fmt_logger::prelude::*;
///
/// let clock = ManualClock::new();
/// let sink = MemorySink::with_min_level(LogLevel::Debug);
///
/// let logger = Logger::builder("planner")
///     .clock(clock.clone())
///     .sink(sink.clone())
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    name: Arc<str>,
    clock: Option<Arc<dyn Clock>>,
    sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder for a logger with the given name
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            clock: None,
            sink: None,
        }
    }

    /// Set the clock used for throttle timing
    ///
    /// Defaults to the process-wide [`SteadyClock`] when not set.
    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Set an already-shared clock
    #[must_use = "builder methods return a new value"]
    pub fn shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the sink receiving emitted records
    ///
    /// Defaults to [`ConsoleSink`] when not set.
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Set an already-shared sink
    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        if self.name.is_empty() {
            return Err(LoggerError::config(
                "LoggerBuilder",
                "logger name must not be empty",
            ));
        }
        Ok(Logger {
            name: self.name,
            clock: self
                .clock
                .unwrap_or_else(|| Arc::new(SteadyClock::new())),
            sink: self.sink.unwrap_or_else(|| Arc::new(ConsoleSink::new())),
        })
    }
}
