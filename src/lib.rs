pub mod dsp; // Oscillators, envelope, pitch law and effects
pub mod error;
pub mod fingerprint;
pub mod io;
pub mod params;
pub mod rng;
pub mod search; // Mutation and target-match search
pub mod synth; // Render engine and WAV output
pub mod voices; // Factory presets

pub use error::{KickError, KickResult};
pub use fingerprint::{color, Rgb};
pub use params::Parameters;
pub use synth::{render, save, save_to_dir};
pub use voices::Preset;
