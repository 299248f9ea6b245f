//! Benchmarks for interlock operations.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use interlock_bench::sprite;
use interlock_core::{Rect, Surface};
use interlock_ops::{NeverCancel, RenderPlan, TileParams, render, render_regions};

/// Benchmark trimming transparent borders.
fn bench_trim(c: &mut Criterion) {
    let mut group = c.benchmark_group("trim");

    for size in [64u32, 256, 1024].iter() {
        let source = sprite(*size, *size, size / 8);
        group.throughput(Throughput::Elements(u64::from(size * size)));

        group.bench_with_input(BenchmarkId::new("trim", size), &source, |b, s| {
            b.iter(|| interlock_ops::trim(black_box(s), s.bounds()).unwrap())
        });
    }

    group.finish();
}

/// Benchmark rendering a full selection.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let source = sprite(96, 96, 8);

    for size in [256u32, 1024].iter() {
        let canvas = Surface::new(*size, *size);
        let selection = Rect::new(0, 0, *size, *size);
        let plan = RenderPlan::from_tile(
            interlock_ops::trim(&source, source.bounds()).unwrap(),
            selection,
            TileParams::new(12, 12, (0.0, 0.0)),
        )
        .unwrap();

        group.throughput(Throughput::Elements(u64::from(size * size)));

        group.bench_with_input(BenchmarkId::new("sequential", size), &plan, |b, p| {
            b.iter(|| {
                let mut dst = canvas.clone();
                let _ = render(black_box(p), &mut dst, &NeverCancel);
                dst
            })
        });

        group.bench_with_input(BenchmarkId::new("regions_64", size), &plan, |b, p| {
            let regions = selection.split_into_tiles(64, 64);
            b.iter(|| {
                let mut dst = canvas.clone();
                let _ = render_regions(black_box(p), &mut dst, &regions, &NeverCancel);
                dst
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &plan, |b, p| {
            b.iter(|| {
                let mut dst = canvas.clone();
                let _ = interlock_ops::parallel::render_parallel(black_box(p), &mut dst, &NeverCancel);
                dst
            })
        });
    }

    group.finish();
}

/// Benchmark re-planning after a parameter change.
fn bench_replan(c: &mut Criterion) {
    let source = sprite(512, 512, 32);
    let plan = RenderPlan::build(&source, source.bounds(), TileParams::default()).unwrap();

    c.bench_function("with_params", |b| {
        b.iter(|| plan.with_params(black_box(TileParams::new(7, 7, (0.3, -0.3)))).unwrap())
    });
}

criterion_group!(benches, bench_trim, bench_render, bench_replan);
criterion_main!(benches);
