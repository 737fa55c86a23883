//! Criterion benchmarks for ducky generation critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Palette: color planning and HLS conversion
//! - Blend: tinting and source-over compositing of one full-size layer
//! - Generator: a complete ducky from planned colors to finished image

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use duckies::assets::{AssetBundle, DUCKY_HEIGHT, DUCKY_WIDTH};
use duckies::color::Hls;
use duckies::composition::{composite_over, tint};
use duckies::generator::make_ducky;
use duckies::palette::plan_colors;
use duckies::rng::seeded_rng;
use image::{Rgba, RgbaImage};
use std::hint::black_box;

// =============================================================================
// Test Data Generators
// =============================================================================

/// Half-transparent white sprite, so both blend branches are exercised.
fn make_sprite() -> RgbaImage {
    RgbaImage::from_fn(DUCKY_WIDTH, DUCKY_HEIGHT, |x, y| {
        let alpha = if (x + y) % 3 == 0 { 0 } else { 200 };
        Rgba([255, 255, 255, alpha])
    })
}

fn make_bundle() -> AssetBundle {
    let sprite = make_sprite();
    AssetBundle::new(
        std::array::from_fn(|_| sprite.clone()),
        vec![sprite.clone(); 4],
        vec![sprite.clone(); 4],
        vec![sprite; 4],
    )
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_palette(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette");

    group.bench_function("plan_colors", |b| {
        let mut rng = seeded_rng(Some(1));
        b.iter(|| plan_colors(black_box(&mut rng)))
    });

    group.bench_function("hls_to_color", |b| {
        b.iter(|| Hls::new(black_box(0.37), black_box(0.55), black_box(0.92)).to_color())
    });

    group.finish();
}

fn bench_blend(c: &mut Criterion) {
    let mut group = c.benchmark_group("blend");
    let sprite = make_sprite();
    group.throughput(Throughput::Elements((DUCKY_WIDTH * DUCKY_HEIGHT) as u64));

    group.bench_function("tint", |b| b.iter(|| tint(black_box(&sprite), Rgba([200, 120, 40, 255]))));

    group.bench_function("composite_over", |b| {
        let mut canvas = RgbaImage::new(DUCKY_WIDTH, DUCKY_HEIGHT);
        b.iter(|| composite_over(black_box(&mut canvas), black_box(&sprite)).is_ok())
    });

    group.finish();
}

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");
    group.sample_size(20);
    let assets = make_bundle();

    for seed in [1u64, 2] {
        group.bench_with_input(BenchmarkId::new("make_ducky", seed), &seed, |b, &seed| {
            b.iter(|| make_ducky(&assets, &mut seeded_rng(Some(seed))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_palette, bench_blend, bench_generator);
criterion_main!(benches);
