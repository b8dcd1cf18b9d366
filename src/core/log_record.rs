//! Log record handed to sinks

use super::log_level::LogLevel;
use serde::Serialize;

/// A fully resolved log message plus its metadata.
///
/// Built per emission after severity and rate-control gating have passed,
/// handed synchronously to the sink and not retained. `function` is the bare
/// enclosing-function name (see [`crate::core::extract_function_name`]).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LogRecord<'a> {
    pub logger: &'a str,
    pub level: LogLevel,
    pub file: &'static str,
    pub line: u32,
    pub function: &'a str,
    pub message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_for_structured_sinks() {
        let record = LogRecord {
            logger: "nav",
            level: LogLevel::Warn,
            file: "src/planner.rs",
            line: 42,
            function: "replan",
            message: "path blocked",
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains("\"logger\":\"nav\""));
        assert!(json.contains("\"level\":\"Warn\""));
        assert!(json.contains("\"line\":42"));
    }
}
