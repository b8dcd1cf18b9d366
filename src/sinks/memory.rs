//! In-memory capture sink
//!
//! Records every emitted message as an owned [`CapturedRecord`], giving tests
//! (and embedders that post-process their own logs) deterministic access to
//! exactly what was emitted, in order.

use crate::core::{LogLevel, LogRecord, Sink};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// Owned copy of an emitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub logger: String,
    pub level: LogLevel,
    pub file: String,
    pub line: u32,
    pub function: String,
    pub message: String,
}

/// Clone-shared sink capturing records in memory.
///
/// Clones share the same buffer, so a test can keep one handle and hand
/// another to a [`Logger`](crate::Logger).
///
/// # Example
///
/// ```
/// use fmt_logger::prelude::*;
/// use fmt_logger::warn;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder("test").sink(sink.clone()).build().unwrap();
///
/// warn!(logger, "count: {}", 3).unwrap();
///
/// let records = sink.records();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].message, "count: 3");
/// assert_eq!(records[0].level, LogLevel::Warn);
/// ```
#[derive(Clone, Default)]
pub struct MemorySink {
    inner: Arc<MemorySinkInner>,
}

struct MemorySinkInner {
    min_level: RwLock<LogLevel>,
    records: Mutex<Vec<CapturedRecord>>,
}

impl Default for MemorySinkInner {
    fn default() -> Self {
        Self {
            min_level: RwLock::new(LogLevel::Debug),
            records: Mutex::new(Vec::new()),
        }
    }
}

impl MemorySink {
    /// Capture everything from Debug up.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture only `level` and above; lower severities report as disabled.
    pub fn with_min_level(level: LogLevel) -> Self {
        let sink = Self::default();
        *sink.inner.min_level.write() = level;
        sink
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.inner.min_level.write() = level;
    }

    /// Snapshot of everything captured so far, in emission order.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.inner.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.records.lock().clear();
    }

    /// Messages only, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.inner
            .records
            .lock()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }
}

impl Sink for MemorySink {
    fn is_enabled(&self, _logger_name: &str, level: LogLevel) -> bool {
        level >= *self.inner.min_level.read()
    }

    fn emit(&self, record: &LogRecord<'_>) {
        self.inner.records.lock().push(CapturedRecord {
            logger: record.logger.to_string(),
            level: record.level,
            file: record.file.to_string(),
            line: record.line,
            function: record.function.to_string(),
            message: record.message.to_string(),
        });
    }
}
