//! Frame-loop hot paths: easing, queue coalescing, render and swap ticks.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use sortvis::chart::queue::SnapshotQueue;
use sortvis::chart::snapshot::Snapshot;
use sortvis::chart::BarChart;
use sortvis::options::ChartOptions;
use sortvis::surface::recording::{RecordingOverlay, RecordingSurface};
use sortvis::util::easing::EasingFunction;
use web_time::{Duration, Instant};

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::ExponentialInOut;
    c.bench_function("exponential_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
}

fn queue_burst_benchmark(c: &mut Criterion) {
    let snapshot = Snapshot::new(vec![1.0; 100]);
    c.bench_function("queue_burst_100", |b| {
        b.iter(|| {
            let mut queue = SnapshotQueue::new();
            for _ in 0..100 {
                let _ = queue.push(snapshot.clone());
            }
            black_box(queue.len())
        });
    });
}

fn chart(count: usize) -> BarChart<RecordingSurface, RecordingOverlay> {
    let mut chart = BarChart::new(&ChartOptions::default());
    let _ = chart.attach_surface(RecordingSurface::new());
    let _ = chart.attach_overlay(RecordingOverlay::new());
    let values: Vec<f64> = (1..=count).map(|v| v as f64).collect();
    let _ = chart.apply(&Snapshot::new(values), Instant::now());
    chart
}

fn render_pass_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");

    for count in [50, 500, 2000] {
        let mut chart = chart(count);
        let values: Vec<f64> = (0..count).map(|v| (count - v) as f64).collect();
        let snapshot = Snapshot::new(values).with_partition(0, count, count / 2);

        group.bench_function(format!("{count}_bars"), |b| {
            b.iter(|| black_box(chart.apply(&snapshot, Instant::now()).is_ok()));
        });
    }
    group.finish();
}

fn swap_frame_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_frame");

    for pairs in [10, 100] {
        let count = pairs * 2;
        group.bench_function(format!("{pairs}_swaps"), |b| {
            b.iter_batched(
                || {
                    let chart = chart(count);
                    let bulk: Vec<(usize, usize)> =
                        (0..pairs).map(|i| (i, count - 1 - i)).collect();
                    let snapshot = Snapshot::new(vec![1.0; count])
                        .with_bulk_swaps(bulk)
                        .animated(0.2);
                    (chart, snapshot)
                },
                |(mut chart, snapshot)| {
                    let start = Instant::now();
                    let _ = chart.apply(&snapshot, start);
                    for frame in 0..16 {
                        let now = start + Duration::from_millis(16 * frame);
                        let _ = black_box(chart.frame(now));
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    queue_burst_benchmark,
    render_pass_benchmark,
    swap_frame_benchmark
);
criterion_main!(benches);
