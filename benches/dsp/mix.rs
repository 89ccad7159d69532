//! Benchmarks for noise layering and the fade window.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use kick_dsp::dsp::mix::{apply_fade, mix_noise};
use kick_dsp::dsp::{NoiseColor, NoiseState};
use kick_dsp::rng::create_rng;

use crate::BUFFER_SIZES;

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");

    for &size in BUFFER_SIZES {
        let input: Vec<i32> = (0..size).map(|i| ((i % 97) as i32 - 48) * 500).collect();
        let sample_rate = size as u32;

        for (name, color) in [
            ("white", NoiseColor::White),
            ("pink", NoiseColor::Pink),
            ("brown", NoiseColor::Brown),
        ] {
            let mut buffer = input.clone();
            let mut rng = create_rng(1);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    buffer.copy_from_slice(&input);
                    let mut noise = NoiseState::new();
                    mix_noise(black_box(&mut buffer), color, 0.5, 16, &mut noise, &mut rng);
                })
            });
        }

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("fade", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                apply_fade(black_box(&mut buffer), sample_rate, black_box(0.02));
            })
        });
    }

    group.finish();
}
