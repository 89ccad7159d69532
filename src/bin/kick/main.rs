//! kick - render, fit and describe kick drums from the command line
//!
//! Run with: cargo run --bin kick -- render --preset 808

mod cli;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};

use cli::{Cli, Commands, FormatArgs, KnobArgs, OptimizeArgs, RenderArgs};
use kick_dsp::io::read_reference;
use kick_dsp::rng::{create_rng, time_seed};
use kick_dsp::search::{self, OptimizerConfig};
use kick_dsp::synth::{next_free_path, save};
use kick_dsp::{color, Parameters, Preset};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => render(args),
        Commands::Optimize(args) => optimize(args),
        Commands::Describe { preset } => describe(preset),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            let chain: Vec<String> = report.chain().map(ToString::to_string).collect();
            eprintln!("kick: {}", chain.join(": "));
            ExitCode::FAILURE
        }
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let mut params = base_record(args.preset, args.params.as_deref(), &args.format)?;
    apply_knobs(&mut params, &args.knobs);

    let seed = args.seed.unwrap_or_else(time_seed);
    tracing::info!(seed, "noise seed");

    let path = args.output.unwrap_or_else(|| next_free_path(Path::new(".")));
    save(&params, &mut create_rng(seed), &path)
        .wrap_err_with(|| format!("could not render {}", path.display()))?;

    println!("{}  {}", path.display(), color(&params).hex());
    Ok(())
}

fn optimize(args: OptimizeArgs) -> Result<()> {
    let reference = read_reference(&args.reference)
        .wrap_err_with(|| format!("could not load {}", args.reference.display()))?;
    let template = args
        .preset
        .unwrap_or_default()
        .build(args.format.sample_rate(), args.format.duration(), args.format.bit_depth)?;

    let config = OptimizerConfig {
        population_size: args.population,
        max_generations: args.max_generations,
        stagnation_limit: args.stagnation,
        ..OptimizerConfig::default()
    };

    let seed = args.seed.unwrap_or_else(time_seed);
    tracing::info!(seed, samples = reference.len(), "starting search");

    let (handle, cancel, best) = search::spawn(&template, config, &mut create_rng(seed), reference);
    let started = Instant::now();
    let limit = args.time_limit.map(Duration::from_secs);
    let mut last_report = Instant::now();

    while !handle.is_finished() {
        std::thread::sleep(Duration::from_millis(100));

        if limit.is_some_and(|l| started.elapsed() >= l) && !cancel.is_cancelled() {
            tracing::info!("time limit reached, cancelling");
            cancel.cancel();
        }

        if last_report.elapsed() >= Duration::from_secs(1) {
            last_report = Instant::now();
            if let Some(b) = best.snapshot() {
                tracing::info!(
                    generation = b.generation,
                    fitness = b.fitness,
                    "{}",
                    b.params.summary()
                );
            }
        }
    }

    let outcome = handle
        .join()
        .map_err(|_| eyre!("search thread panicked"))??;

    println!(
        "{} after {} generations, fitness {:.6}",
        outcome.status.as_str(),
        outcome.generations,
        outcome.fitness
    );
    println!("{}", outcome.best.summary());

    let path = args.output.unwrap_or_else(|| next_free_path(Path::new(".")));
    save(&outcome.best, &mut create_rng(seed), &path)
        .wrap_err_with(|| format!("could not render {}", path.display()))?;
    println!("{}  {}", path.display(), color(&outcome.best).hex());

    if let Some(json_path) = args.params_out {
        write_params(&outcome.best, &json_path)?;
    }
    Ok(())
}

fn describe(preset: Preset) -> Result<()> {
    let params = preset.build(96_000, 1.0, 16)?;
    println!("{} - {}", preset.name(), preset.description());
    println!("{}", serde_json::to_string_pretty(&params)?);
    println!("colour {}", color(&params).hex());
    Ok(())
}

/// Record the knobs are applied to: a JSON file, a preset, or the default kick.
fn base_record(preset: Option<Preset>, json: Option<&Path>, format: &FormatArgs) -> Result<Parameters> {
    if let Some(path) = json {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read {}", path.display()))?;
        return serde_json::from_str(&text)
            .wrap_err_with(|| format!("could not parse {}", path.display()));
    }

    let mut params = match preset {
        Some(preset) => preset.build(format.sample_rate(), format.duration(), format.bit_depth)?,
        None => Parameters::default(),
    };
    params.sample_rate = format.sample_rate();
    params.duration = format.duration();
    params.bit_depth = format.bit_depth;
    Ok(params)
}

fn apply_knobs(params: &mut Parameters, knobs: &KnobArgs) {
    let scalar_overrides = [
        (&mut params.start_freq, knobs.start),
        (&mut params.end_freq, knobs.end),
        (&mut params.attack, knobs.attack),
        (&mut params.decay, knobs.decay),
        (&mut params.sustain, knobs.sustain),
        (&mut params.release, knobs.release),
        (&mut params.drive, knobs.drive),
        (&mut params.filter_cutoff, knobs.cutoff),
        (&mut params.filter_resonance, knobs.resonance),
        (&mut params.sweep, knobs.sweep),
        (&mut params.pitch_decay, knobs.pitch_decay),
        (&mut params.noise_amount, knobs.noise_amount),
        (&mut params.saturator_amount, knobs.saturator),
        (&mut params.fade_duration, knobs.fade),
    ];
    for (field, value) in scalar_overrides {
        if let Some(value) = value {
            *field = value;
        }
    }

    if let Some(waveform) = knobs.waveform {
        params.waveform_type = waveform;
    }
    if let Some(noise) = knobs.noise {
        params.noise_type = noise;
    }
    if let Some(levels) = &knobs.levels {
        params.set_oscillator_levels(levels.clone());
    }
    if let Some(bands) = &knobs.bands {
        params.filter_bands = bands.clone();
    }
    if knobs.abrupt {
        params.smooth_frequency_transitions = false;
    }
}

fn write_params(params: &Parameters, path: &Path) -> Result<()> {
    let file = File::create(path).wrap_err_with(|| format!("could not create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), params)
        .wrap_err_with(|| format!("could not write {}", path.display()))?;
    tracing::info!(path = %path.display(), "saved parameters");
    Ok(())
}
