//! Benchmarks for the ADSR envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use kick_dsp::dsp::Envelope;

use crate::BUFFER_SIZES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let env = Envelope::new(0.005, 0.3, 0.2, 0.3, 1.0);

    for &size in BUFFER_SIZES {
        let mut buffer = vec![0.0f64; size];
        let sample_rate = size as u32;

        group.bench_with_input(BenchmarkId::new("render", size), &size, |b, _| {
            b.iter(|| env.render(black_box(&mut buffer), black_box(sample_rate)))
        });
    }

    group.finish();
}
