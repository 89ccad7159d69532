//! Command-line surface of the `kick` driver.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use kick_dsp::dsp::{NoiseType, WaveformType};
use kick_dsp::Preset;

#[derive(Parser)]
#[command(name = "kick")]
#[command(about = "Kick drum synthesizer")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a kick to a WAV file
    Render(RenderArgs),

    /// Fit parameters to a reference WAV
    Optimize(OptimizeArgs),

    /// Print a preset as JSON with its colour tag
    Describe {
        /// Preset selector (808, 909, 707, 606, linn, deephouse, experimental)
        #[arg(default_value = "default")]
        preset: Preset,
    },
}

/// Render format shared by every subcommand that renders.
#[derive(Args, Clone)]
pub struct FormatArgs {
    /// Sample rate in kHz (44, 48, 96 or 192)
    #[arg(short, long, default_value_t = 96, value_parser = parse_quality)]
    pub quality: u32,

    /// Length in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    pub length: u32,

    /// Bits per sample (16 or 24)
    #[arg(short, long, default_value_t = 16)]
    pub bit_depth: u16,
}

impl FormatArgs {
    pub fn sample_rate(&self) -> u32 {
        match self.quality {
            44 => 44_100,
            other => other * 1000,
        }
    }

    pub fn duration(&self) -> f64 {
        self.length as f64 / 1000.0
    }
}

#[derive(Args)]
pub struct RenderArgs {
    /// Start from a preset instead of the default kick
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Start from a JSON parameter record
    #[arg(long, conflicts_with = "preset")]
    pub params: Option<PathBuf>,

    #[command(flatten)]
    pub format: FormatArgs,

    #[command(flatten)]
    pub knobs: KnobArgs,

    /// Output file (defaults to the next free kickN.wav in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for the noise layers
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Knob overrides. Only flags that are given replace the base record.
#[derive(Args, Default)]
pub struct KnobArgs {
    /// Sweep start frequency (Hz)
    #[arg(long)]
    pub start: Option<f64>,
    /// Sweep end frequency (Hz)
    #[arg(long)]
    pub end: Option<f64>,
    /// Waveform: index 0-6, sin/tri/saw/sqr/nwh/npk/nbr or a name
    #[arg(short, long)]
    pub waveform: Option<WaveformType>,
    #[arg(long)]
    pub attack: Option<f64>,
    #[arg(long)]
    pub decay: Option<f64>,
    #[arg(long)]
    pub sustain: Option<f64>,
    #[arg(long)]
    pub release: Option<f64>,
    #[arg(long)]
    pub drive: Option<f64>,
    #[arg(long)]
    pub cutoff: Option<f64>,
    #[arg(long)]
    pub resonance: Option<f64>,
    #[arg(long)]
    pub sweep: Option<f64>,
    #[arg(long)]
    pub pitch_decay: Option<f64>,
    /// Noise layer: none, white, pink or brown
    #[arg(short, long)]
    pub noise: Option<NoiseType>,
    #[arg(long)]
    pub noise_amount: Option<f64>,
    #[arg(long)]
    pub saturator: Option<f64>,
    /// Fade-in/out length in seconds
    #[arg(long)]
    pub fade: Option<f64>,
    /// Oscillator gains, comma separated (one oscillator per value)
    #[arg(long, value_delimiter = ',')]
    pub levels: Option<Vec<f64>>,
    /// Three ascending band edges in Hz, comma separated
    #[arg(long, value_delimiter = ',')]
    pub bands: Option<Vec<f64>>,
    /// Step the pitch at half duration instead of sweeping
    #[arg(long)]
    pub abrupt: bool,
}

#[derive(Args)]
pub struct OptimizeArgs {
    /// Reference WAV to match
    pub reference: PathBuf,

    /// Preset supplying the sweep frequencies (defaults to the default kick)
    #[arg(short, long)]
    pub preset: Option<Preset>,

    #[command(flatten)]
    pub format: FormatArgs,

    /// Individuals per generation
    #[arg(long, default_value_t = 100)]
    pub population: usize,

    #[arg(long, default_value_t = 1000)]
    pub max_generations: usize,

    /// Generations without improvement before stopping
    #[arg(long, default_value_t = 50)]
    pub stagnation: usize,

    /// Stop the search after this many seconds
    #[arg(short, long)]
    pub time_limit: Option<u64>,

    /// WAV file for the best match (defaults to the next free kickN.wav)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the best record as JSON
    #[arg(long)]
    pub params_out: Option<PathBuf>,

    #[arg(long)]
    pub seed: Option<u64>,
}

fn parse_quality(s: &str) -> Result<u32, String> {
    match s.trim() {
        "44" => Ok(44),
        "48" => Ok(48),
        "96" => Ok(96),
        "192" => Ok(192),
        other => Err(format!("invalid quality '{other}', choose from: 44, 48, 96, 192")),
    }
}
