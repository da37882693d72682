//! Performance measurement for nearest-color selection over growing palettes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use photomosaic::analysis::Color;
use photomosaic::compose::selection::nearest_color_index;
use std::hint::black_box;

fn build_palette(len: usize) -> Vec<Color> {
    (0..len)
        .map(|i| Color::new((i % 256) as u8, (i * 7 % 256) as u8, (i * 13 % 256) as u8))
        .collect()
}

/// Measures the linear scan cost as the source collection grows
fn bench_nearest_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_color_index");

    for size in &[16_usize, 256, 4096] {
        let palette = build_palette(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| nearest_color_index(black_box(Color::new(120, 80, 200)), &palette));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_nearest_color);
criterion_main!(benches);
