//! Criterion benchmarks for hull construction and convex clipping.
//! Focus sizes: n in {8, 32, 128, 512} points for hulls,
//! {4, 8, 16, 32} vertices per polygon for intersections.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use convex2::prelude::*;

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

fn sampled_pair(verts: usize, seed: u64) -> (ConvexPolygon, ConvexPolygon) {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(verts),
        ..RadialCfg::default()
    };
    let a = draw_polygon_radial(cfg, ReplayToken { seed, index: 0 }).expect("sample a");
    let b = draw_polygon_radial(cfg, ReplayToken { seed, index: 1 }).expect("sample b");
    (a, b)
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("geom2");
    for &n in &[8usize, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::new("convex_hull", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 43),
                |points| {
                    let _hull = convex_hull(&points);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_intersection(c: &mut Criterion) {
    let mut group = c.benchmark_group("geom2");
    for &verts in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("intersection", verts), &verts, |b, &verts| {
            b.iter_batched(
                || sampled_pair(verts, 7),
                |(a, bp)| {
                    let _res = a.intersection(&bp);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull, bench_intersection);
criterion_main!(benches);
