use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use css_easing_editor::engine::{
    canonicalize, cubic_to_poly, decode_linear, encode_linear, find_preset, insert_point,
    nearest_distance_to_curve, CubicCurve, LinearExportOptions, PointIdGenerator, PolyCurve,
    TimingVariant, Y_RANGE_EXPORT,
};
use glam::DVec2;
use std::hint::black_box;

fn build_curve(point_count: usize) -> PolyCurve {
    let mut ids = PointIdGenerator::new();
    let mut curve = cubic_to_poly(&CubicCurve::new(0.34, 1.56, 0.64, 1.0), &mut ids);
    for i in 1..point_count.saturating_sub(1) {
        let x = i as f64 / point_count as f64;
        if let Some((next, _)) = insert_point(&curve, DVec2::new(x, 0.0), &mut ids) {
            curve = next;
        }
    }
    curve
}

fn bench_linear_codec(c: &mut Criterion) {
    let bounce = find_preset("bounce").map(|p| p.css).unwrap_or("linear(0, 1)");

    c.bench_function("linear_decode_bounce", |b| {
        b.iter(|| {
            let mut ids = PointIdGenerator::new();
            let curve = decode_linear(black_box(bounce), &mut ids).expect("Preset lesbar");
            black_box(curve.len())
        })
    });

    let mut group = c.benchmark_group("linear_encode");
    for &point_count in &[2usize, 10, 30] {
        let curve = build_curve(point_count);
        for simplify in [0.0, 0.01] {
            let options = LinearExportOptions { simplify, round: 5 };
            group.bench_with_input(
                BenchmarkId::new(format!("simplify_{simplify}"), point_count),
                &curve,
                |b, curve| {
                    b.iter(|| {
                        let out = encode_linear(
                            black_box(curve),
                            "bench",
                            TimingVariant::Animation,
                            options,
                        );
                        black_box(out.timing_function.len())
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    for &point_count in &[10usize, 30] {
        let curve = build_curve(point_count);

        group.bench_with_input(
            BenchmarkId::new("hit_test", point_count),
            &curve,
            |b, curve| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for i in 0..64 {
                        let p = DVec2::new(i as f64 / 63.0, 0.5);
                        if nearest_distance_to_curve(black_box(p), curve) < 0.1 {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("canonicalize", point_count),
            &curve,
            |b, curve| {
                b.iter(|| {
                    let mut ids = PointIdGenerator::new();
                    let result = canonicalize(black_box(curve.points()), Y_RANGE_EXPORT, &mut ids);
                    black_box(result.len())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("value_at", point_count),
            &curve,
            |b, curve| {
                b.iter(|| {
                    let sum: f64 = (0..=100).map(|i| curve.value_at(black_box(i as f64 / 100.0))).sum();
                    black_box(sum)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_linear_codec, bench_geometry);
criterion_main!(core_benches);
