//! Core logger types and traits

pub mod clock;
pub mod error;
pub mod format;
pub mod location;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod sink;
pub mod site;

pub use clock::{Clock, ClockError, ManualClock, SteadyClock};
pub use error::{LoggerError, Result};
pub use format::{Hertz, Percent, Seconds, Stamp, TimeOfDay};
pub use location::{extract_function_name, SourceLocation};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use sink::Sink;
pub use site::{ChangeDelta, OnChangeSite, OnceSite, ThrottleSite};
