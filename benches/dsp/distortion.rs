//! Benchmarks for the drive clipper and the tanh saturator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use kick_dsp::dsp::distortion;

use crate::BUFFER_SIZES;

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    for &size in BUFFER_SIZES {
        let input: Vec<f64> = (0..size).map(|i| (i as f64 * 0.01).sin()).collect();

        // Drive - per-sample soft clip on the float mix
        group.bench_with_input(BenchmarkId::new("drive", size), &size, |b, _| {
            b.iter(|| {
                input
                    .iter()
                    .map(|&x| distortion::drive(black_box(x), black_box(0.4)))
                    .sum::<f64>()
            })
        });

        // Saturator - tanh over the quantised buffer
        let pcm: Vec<i32> = input.iter().map(|&x| (x * 65_535.0) as i32).collect();
        let mut buffer = pcm.clone();
        group.bench_with_input(BenchmarkId::new("saturate", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&pcm);
                distortion::saturate_buffer(black_box(&mut buffer), black_box(0.3));
            })
        });
    }

    group.finish();
}
