//! Sink trait: the severity-gated emission backend

use super::log_level::LogLevel;
use super::log_record::LogRecord;

/// Backend that decides whether a severity is enabled and records messages
/// once the dispatcher has decided to emit.
///
/// `is_enabled` is consulted before any rate-control bookkeeping or message
/// rendering happens; when it returns `false` the logging call is a no-op.
/// `emit` is fire-and-forget: the dispatcher never inspects a result, so
/// sinks handle their own output failures.
pub trait Sink: Send + Sync {
    fn is_enabled(&self, logger_name: &str, level: LogLevel) -> bool;

    fn emit(&self, record: &LogRecord<'_>);
}
