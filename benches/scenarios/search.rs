//! Benchmark for one optimizer generation.

use criterion::Criterion;
use kick_dsp::rng::create_rng;
use kick_dsp::search::{Optimizer, OptimizerConfig};
use kick_dsp::{render, Parameters};

pub fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/search");
    group.sample_size(10);

    // Quarter second at 48 kHz keeps a generation of 100 renders reasonable
    let mut target = Parameters::default();
    target.sample_rate = 48_000;
    target.duration = 0.25;
    let Ok(reference) = render(&target, &mut create_rng(0)) else {
        return;
    };

    let config = OptimizerConfig {
        max_generations: 1,
        ..OptimizerConfig::default()
    };

    group.bench_function("generation", |b| {
        b.iter(|| {
            let mut optimizer = Optimizer::new(&target, config.clone(), 42);
            optimizer.run(&reference)
        })
    });

    group.finish();
}
