//! Gesture tracker benchmarks (criterion - wall-clock time).
//!
//! Run all:    cargo bench --manifest-path benchmarks/Cargo.toml --bench gestures
//! Filter:     cargo bench --manifest-path benchmarks/Cargo.toml --bench gestures -- pan

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use touch_nav::{FrameInput, GestureTracker};
use touch_nav_bench::*;

fn run(frames: &[FrameInput]) -> f32 {
    let mut tracker = GestureTracker::new();
    let mut acc = 0.0;
    for frame in frames {
        tracker.apply(frame);
        acc += tracker.taps().len() as f32;
        if let Some(mut pan) = tracker.pan_mut() {
            acc += pan.incremental().length();
        }
        if let Some(mut pinch) = tracker.pinch_mut() {
            acc += pinch.incremental();
        }
    }
    acc
}

// ---------------------------------------------------------------------------
// Taps
// ---------------------------------------------------------------------------

fn bench_taps(c: &mut Criterion) {
    let mut group = c.benchmark_group("taps/storm");
    for &n in &[100, 1000, 10000] {
        let frames = tap_storm(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| run(&frames));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Pan / pinch
// ---------------------------------------------------------------------------

fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan/drag");
    for &n in &[100, 1000, 10000] {
        let frames = long_pan(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| run(&frames));
        });
    }
    group.finish();
}

fn bench_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch/spread");
    for &n in &[100, 1000, 10000] {
        let frames = long_pinch(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| run(&frames));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_taps, bench_pan, bench_pinch);
criterion_main!(benches);
