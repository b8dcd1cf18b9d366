//! Property-based tests for fmt_logger using proptest

use fmt_logger::prelude::*;
use fmt_logger::source_location;
use fmt_logger::{OnChangeSite, OnceSite, ThrottleSite};
use proptest::prelude::*;
use std::time::Duration;

fn capture_logger() -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder("property")
        .sink(sink.clone())
        .build()
        .unwrap();
    (logger, sink)
}

fn manual_logger() -> (Logger, MemorySink, ManualClock) {
    let clock = ManualClock::new();
    let sink = MemorySink::new();
    let logger = Logger::builder("property")
        .clock(clock.clone())
        .sink(sink.clone())
        .build()
        .unwrap();
    (logger, sink, clock)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]) {
        let as_str = level.to_str();
        let parsed: LogLevel = as_str.parse().unwrap();
        assert_eq!(level, parsed);
    }

    /// Test that LogLevel ordering matches its numeric encoding
    #[test]
    fn test_log_level_ordering(
        level1 in prop_oneof![
            Just(LogLevel::Debug),
            Just(LogLevel::Info),
            Just(LogLevel::Warn),
            Just(LogLevel::Error),
            Just(LogLevel::Fatal),
        ],
        level2 in prop_oneof![
            Just(LogLevel::Debug),
            Just(LogLevel::Info),
            Just(LogLevel::Warn),
            Just(LogLevel::Error),
            Just(LogLevel::Fatal),
        ]
    ) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        assert_eq!(level1 <= level2, val1 <= val2);
        assert_eq!(level1 < level2, val1 < val2);
    }
}

// ============================================================================
// Rate Control Tests
// ============================================================================

proptest! {
    /// Test that a once site emits exactly one record however often it runs
    #[test]
    fn test_once_emits_exactly_one(calls in 1usize..100) {
        let (logger, sink) = capture_logger();
        let site = OnceSite::new();

        for _ in 0..calls {
            logger
                .log_once(&site, LogLevel::Info, source_location!(), format_args!("once"))
                .unwrap();
        }

        assert_eq!(sink.len(), 1);
    }

    /// Test that throttle emission matches the window model for arbitrary
    /// clock advances: a call emits iff at least `interval` has passed since
    /// the last emission (the first call always emits)
    #[test]
    fn test_throttle_matches_window_model(
        advances in prop::collection::vec(0u64..30, 1..50),
        interval_ms in 1u64..20,
    ) {
        let (logger, sink, clock) = manual_logger();
        let site = ThrottleSite::new();
        let interval = Duration::from_millis(interval_ms);

        let mut now_ms = 0u64;
        let mut last_emit_ms: Option<u64> = None;
        let mut expected = 0usize;

        for advance in advances {
            clock.advance(Duration::from_millis(advance));
            now_ms += advance;

            logger
                .log_throttle(&site, interval, LogLevel::Info, source_location!(), format_args!("tick"))
                .unwrap();

            let emits = match last_emit_ms {
                None => true,
                Some(last) => now_ms - last >= interval_ms,
            };
            if emits {
                last_emit_ms = Some(now_ms);
                expected += 1;
            }
        }

        assert_eq!(sink.len(), expected);
    }

    /// Test that plain on-change emits once per value transition
    #[test]
    fn test_on_change_counts_transitions(values in prop::collection::vec(0i32..5, 1..50)) {
        let (logger, sink) = capture_logger();
        let site = OnChangeSite::new();

        for value in &values {
            logger
                .log_on_change(&site, value, LogLevel::Info, source_location!(), format_args!("{}", value))
                .unwrap();
        }

        let mut deduped = values.clone();
        deduped.dedup();
        assert_eq!(sink.len(), deduped.len() - 1);
    }

    /// Test that thresholded on-change matches a greedy baseline walk: the
    /// baseline moves to the observed value exactly when the delta reaches
    /// the threshold
    #[test]
    fn test_on_change_threshold_matches_baseline_walk(
        values in prop::collection::vec(-100.0f64..100.0, 1..50),
        threshold in 0.5f64..25.0,
    ) {
        let (logger, sink) = capture_logger();
        let site = OnChangeSite::new();

        for value in &values {
            logger
                .log_on_change_by(&site, value, threshold, LogLevel::Info, source_location!(), format_args!("{}", value))
                .unwrap();
        }

        let mut baseline = values[0];
        let mut expected = 0usize;
        for value in &values[1..] {
            if (value - baseline).abs() >= threshold {
                baseline = *value;
                expected += 1;
            }
        }

        assert_eq!(sink.len(), expected);
    }

    /// Test that every emitted record carries the rendered message verbatim
    #[test]
    fn test_message_rendered_verbatim(value in any::<i64>(), name in "[a-z]{1,12}") {
        let (logger, sink) = capture_logger();

        logger
            .log(LogLevel::Warn, source_location!(), format_args!("{}={}", name, value))
            .unwrap();

        assert_eq!(sink.messages(), vec![format!("{}={}", name, value)]);
    }
}
