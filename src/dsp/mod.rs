//! Low-level DSP primitives used by the kick engine.
//!
//! Each stage is a small pure function (or a tiny state value) so the engine
//! in `synth` can compose them in a fixed order and tests can poke each stage
//! on its own. Oscillators, the envelope and the pitch law work in `f64`
//! seconds; the post-mix effects work on the quantised `i32` buffer.

/// Drive soft clipper and tanh saturator.
pub mod distortion;
/// Time-indexed linear ADSR envelope.
pub mod envelope;
/// Time-keyed multi-band attenuator.
pub mod filter;
/// Noise layering and fade windowing.
pub mod mix;
/// White, pink and brown noise with render-local state.
pub mod noise;
/// Periodic waveforms and the oscillator dispatch.
pub mod oscillator;
/// Pitch sweep law and pitch bump table.
pub mod pitch;

pub use envelope::Envelope;
pub use noise::{NoiseColor, NoiseState, NoiseType};
pub use oscillator::WaveformType;
pub use pitch::PitchSweep;
