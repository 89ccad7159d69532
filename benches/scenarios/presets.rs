//! Benchmarks for complete preset renders.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use kick_dsp::dsp::NoiseType;
use kick_dsp::params::SUPPORTED_SAMPLE_RATES;
use kick_dsp::rng::create_rng;
use kick_dsp::{render, Preset};

pub fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/presets");
    group.sample_size(20);

    for &rate in &SUPPORTED_SAMPLE_RATES {
        for preset in [Preset::Tr808, Preset::Tr909, Preset::Experimental] {
            let Ok(params) = preset.build(rate, 1.0, 16) else {
                continue;
            };
            let mut rng = create_rng(0);
            group.bench_with_input(BenchmarkId::new(preset.selector(), rate), &rate, |b, _| {
                b.iter(|| render(black_box(&params), &mut rng))
            });
        }

        // Deep house with a brown noise layer on top
        if let Ok(mut params) = Preset::DeepHouse.build(rate, 1.0, 16) {
            params.noise_type = NoiseType::Brown;
            params.noise_amount = 0.3;
            let mut rng = create_rng(0);
            group.bench_with_input(BenchmarkId::new("deephouse+brown", rate), &rate, |b, _| {
                b.iter(|| render(black_box(&params), &mut rng))
            });
        }
    }

    group.finish();
}
