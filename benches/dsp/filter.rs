//! Benchmarks for the time-keyed band attenuator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use kick_dsp::dsp::filter::{attenuate_bands, DEFAULT_BANDS};

use crate::BUFFER_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BUFFER_SIZES {
        let input: Vec<i32> = (0..size).map(|i| ((i % 200) as i32 - 100) * 300).collect();
        let mut buffer = input.clone();
        let sample_rate = size as u32;

        group.bench_with_input(BenchmarkId::new("bands", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                attenuate_bands(black_box(&mut buffer), black_box(&DEFAULT_BANDS), sample_rate);
            })
        });
    }

    group.finish();
}
