//! kickpad - 16 random kicks on a pad grid
//!
//! Run with: cargo run --bin kickpad

mod app;
mod audio;
mod ui;

use std::path::PathBuf;

use clap::Parser;

use app::PadApp;
use audio::Player;
use kick_dsp::rng::{create_rng, time_seed};
use kick_dsp::Preset;

#[derive(Parser)]
#[command(name = "kickpad")]
#[command(about = "Explore kick variations on a 4x4 pad grid")]
struct Args {
    /// Preset supplying the sweep frequencies of every pad
    #[arg(short, long, default_value = "default")]
    preset: Preset,

    /// Sample rate of saved files in Hz
    #[arg(long, default_value_t = 96_000)]
    sample_rate: u32,

    /// Length in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    length: u32,

    /// Directory that receives kickN.wav files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let template = args
        .preset
        .build(args.sample_rate, args.length as f64 / 1000.0, 16)?;
    let rng = create_rng(args.seed.unwrap_or_else(time_seed));

    // Pads still work without a device; they just stay silent
    let player = Player::open().ok();

    let mut terminal = ratatui::init();
    let res = PadApp::new(template, args.dir, rng, player).run(&mut terminal);
    ratatui::restore();
    res
}
