//! Console sink implementation

use crate::core::{LogLevel, LogRecord, Sink};
use colored::Colorize;
use parking_lot::RwLock;

/// Sink writing formatted lines to stdout/stderr.
///
/// Error and Fatal records go to stderr, everything else to stdout. The
/// minimum level applies to all loggers sharing this sink.
pub struct ConsoleSink {
    min_level: RwLock<LogLevel>,
    use_colors: bool,
    show_location: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            min_level: RwLock::new(LogLevel::Info),
            use_colors: true,
            show_location: true,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Set the minimum level; lower severities report as disabled.
    #[must_use]
    pub fn with_min_level(self, level: LogLevel) -> Self {
        *self.min_level.write() = level;
        self
    }

    /// Include or drop the `file:line(function)` segment.
    #[must_use]
    pub fn with_location(mut self, show: bool) -> Self {
        self.show_location = show;
        self
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    fn format_line(&self, record: &LogRecord<'_>) -> String {
        let level_str = if self.use_colors {
            format!("{:5}", record.level.to_str())
                .color(record.level.color_code())
                .to_string()
        } else {
            format!("{:5}", record.level.to_str())
        };

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");

        if self.show_location {
            format!(
                "[{}] [{}] [{}] {}:{}({}) - {}",
                timestamp,
                level_str,
                record.logger,
                record.file,
                record.line,
                record.function,
                record.message
            )
        } else {
            format!(
                "[{}] [{}] [{}] - {}",
                timestamp, level_str, record.logger, record.message
            )
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn is_enabled(&self, _logger_name: &str, level: LogLevel) -> bool {
        level >= *self.min_level.read()
    }

    fn emit(&self, record: &LogRecord<'_>) {
        let line = self.format_line(record);
        match record.level {
            LogLevel::Error | LogLevel::Fatal => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
}
