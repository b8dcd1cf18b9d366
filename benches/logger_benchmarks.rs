//! Criterion benchmarks for fmt_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fmt_logger::prelude::*;
use fmt_logger::source_location;
use fmt_logger::{OnceSite, ThrottleSite};
use std::time::Duration;

// ============================================================================
// Fast-Path Benchmarks
// ============================================================================

fn bench_suppressed_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("suppressed_paths");
    group.throughput(Throughput::Elements(1));

    let gated = Logger::builder("bench")
        .sink(MemorySink::with_min_level(LogLevel::Fatal))
        .build()
        .unwrap();

    // Disabled severity: no rendering, no state, no emission.
    group.bench_function("disabled_severity", |b| {
        b.iter(|| {
            gated
                .log(
                    LogLevel::Debug,
                    source_location!(),
                    format_args!("value: {}", black_box(42)),
                )
                .unwrap();
        });
    });

    let logger = Logger::builder("bench")
        .sink(MemorySink::new())
        .build()
        .unwrap();

    let once_site = OnceSite::new();
    logger
        .log_once(
            &once_site,
            LogLevel::Info,
            source_location!(),
            format_args!("claimed"),
        )
        .unwrap();
    group.bench_function("once_already_claimed", |b| {
        b.iter(|| {
            logger
                .log_once(
                    &once_site,
                    LogLevel::Info,
                    source_location!(),
                    format_args!("value: {}", black_box(42)),
                )
                .unwrap();
        });
    });

    let throttle_site = ThrottleSite::new();
    let interval = Duration::from_secs(3600);
    logger
        .log_throttle(
            &throttle_site,
            interval,
            LogLevel::Info,
            source_location!(),
            format_args!("claimed"),
        )
        .unwrap();
    group.bench_function("throttle_within_window", |b| {
        b.iter(|| {
            logger
                .log_throttle(
                    &throttle_site,
                    interval,
                    LogLevel::Info,
                    source_location!(),
                    format_args!("value: {}", black_box(42)),
                )
                .unwrap();
        });
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let sink = MemorySink::new();
    let logger = Logger::builder("bench")
        .sink(sink.clone())
        .build()
        .unwrap();

    group.bench_function("plain_to_memory", |b| {
        b.iter(|| {
            logger
                .log(
                    LogLevel::Info,
                    source_location!(),
                    format_args!("processed {} items in {}", black_box(128), black_box(7)),
                )
                .unwrap();
        });
        sink.clear();
    });

    group.finish();
}

criterion_group!(benches, bench_suppressed_paths, bench_emission);
criterion_main!(benches);
