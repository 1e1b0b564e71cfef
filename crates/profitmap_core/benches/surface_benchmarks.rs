//! Criterion benchmarks for profitmap_core surface computation
//!
//! Run with: cargo bench -p profitmap_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use profitmap_core::contour::iso_segments;
use profitmap_core::model::{Axis, ProfitParameters, SurfaceAxes};
use profitmap_core::summary::SurfaceSummary;
use profitmap_core::surface::compute_surface;

fn axes_with_points(points: usize) -> SurfaceAxes {
    SurfaceAxes {
        spend: Axis::new(0.0, 1000.0, points),
        roas: Axis::new(1.0, 8.0, points),
    }
}

fn bench_default_surface(c: &mut Criterion) {
    let params = ProfitParameters::default();
    let axes = SurfaceAxes::default();

    c.bench_function("default_100x100_surface", |b| {
        b.iter(|| compute_surface(black_box(&params), black_box(&axes)))
    });
}

fn bench_grid_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_resolution");
    let params = ProfitParameters::default();

    for points in [50, 100, 200, 400].iter() {
        let axes = axes_with_points(*points);
        group.bench_with_input(BenchmarkId::new("points", points), points, |b, _| {
            b.iter(|| compute_surface(black_box(&params), black_box(&axes)))
        });
    }

    group.finish();
}

fn bench_contour_and_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("post_processing");
    let surface = compute_surface(&ProfitParameters::default(), &SurfaceAxes::default());

    group.bench_function("break_even_segments", |b| {
        b.iter(|| {
            iso_segments(
                black_box(&surface.spend_values),
                black_box(&surface.roas_values),
                black_box(&surface.profit),
                0.0,
            )
        })
    });

    group.bench_function("summary", |b| {
        b.iter(|| SurfaceSummary::from_surface(black_box(&surface)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_default_surface,
    bench_grid_resolution,
    bench_contour_and_summary,
);
criterion_main!(benches);
