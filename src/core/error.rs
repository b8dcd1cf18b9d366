//! Error types for the logger

use super::clock::ClockError;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A `Display` implementation failed while the message was rendered.
    ///
    /// Format strings themselves are checked at compile time; this only
    /// surfaces when a user type's `Display` returns an error mid-render.
    /// It propagates to the logging call site rather than being swallowed,
    /// since a broken formatter is a programming defect.
    #[error("failed to format log message: {0}")]
    Format(#[from] std::fmt::Error),

    /// Reading the throttle clock failed.
    ///
    /// The dispatcher recovers from this locally (see
    /// [`Logger::log_throttle`](crate::Logger::log_throttle)); the variant
    /// exists so sinks and diagnostics can name the failure.
    #[error(transparent)]
    ClockRead(#[from] ClockError),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
