//! Benchmarks for the oscillators under a pitch sweep.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use kick_dsp::dsp::oscillator::oscillate;
use kick_dsp::dsp::pitch::pitch_modulation;
use kick_dsp::dsp::{NoiseState, PitchSweep, WaveformType};
use kick_dsp::rng::create_rng;

use crate::BUFFER_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BUFFER_SIZES {
        let sample_rate = size as u32;
        let sweep = PitchSweep::new(150.0, 40.0, 1.0, 0.8, true);
        let pitch_mod = pitch_modulation(sample_rate, size);
        let mut rng = create_rng(0);

        for waveform in [WaveformType::Sine, WaveformType::Triangle, WaveformType::Square] {
            group.bench_with_input(
                BenchmarkId::new(waveform.abbreviation(), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        let mut noise = NoiseState::new();
                        let mut acc = 0.0;
                        for (i, &m) in pitch_mod.iter().enumerate() {
                            let t = i as f64 / sample_rate as f64;
                            let f = sweep.frequency_at(t, m);
                            acc += oscillate(black_box(waveform), f, t, i, &mut noise, &mut rng);
                        }
                        acc
                    })
                },
            );
        }
    }

    group.finish();
}
