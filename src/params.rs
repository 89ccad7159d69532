//! The kick parameter record.
//!
//! One `Parameters` value fully describes a render. It is plain data: clone
//! it to take a snapshot (the sequence fields are deep-copied), mutate the
//! clone freely, and call [`Parameters::validate`] (done by every render)
//! to check the invariants.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::Rng;

use crate::dsp::filter::DEFAULT_BANDS;
use crate::dsp::{NoiseType, WaveformType};
use crate::error::{KickError, KickResult};

/// Sample rates the drivers offer.
pub const SUPPORTED_SAMPLE_RATES: [u32; 4] = [44_100, 48_000, 96_000, 192_000];

/// Bit depths the WAV sink can write.
pub const SUPPORTED_BIT_DEPTHS: [u16; 2] = [16, 24];

/// Full parameter set for one kick render.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    /// Sweep start frequency (Hz).
    pub start_freq: f64,
    /// Sweep end frequency (Hz). Usually below `start_freq`.
    pub end_freq: f64,
    pub sample_rate: u32,
    /// Length in seconds.
    pub duration: f64,
    /// 16 or 24.
    pub bit_depth: u16,
    pub waveform_type: WaveformType,
    pub attack: f64,
    pub decay: f64,
    /// Sustain level, 0.0 - 1.0.
    pub sustain: f64,
    pub release: f64,
    /// Soft clip amount, 0.0 disables.
    pub drive: f64,
    /// Carried for presets and the fingerprint; the band stage ignores it.
    pub filter_cutoff: f64,
    pub filter_resonance: f64,
    /// Exponent scale of the pitch sweep.
    pub sweep: f64,
    pub pitch_decay: f64,
    pub noise_type: NoiseType,
    pub noise_amount: f64,
    pub num_oscillators: usize,
    /// One gain per oscillator.
    pub oscillator_levels: Vec<f64>,
    pub saturator_amount: f64,
    /// Three ascending band edges (Hz).
    pub filter_bands: Vec<f64>,
    /// Fade-in/out length in seconds, 0.0 disables.
    pub fade_duration: f64,
    /// Exponential sweep when true, step at half duration when false.
    pub smooth_frequency_transitions: bool,
}

impl Parameters {
    /// Base record used by every preset.
    ///
    /// Only the sample rate and duration are checked here; the rest is
    /// checked by [`Parameters::validate`] at render time.
    pub fn new(
        start_freq: f64,
        end_freq: f64,
        sample_rate: u32,
        duration: f64,
        bit_depth: u16,
    ) -> KickResult<Self> {
        if sample_rate == 0 {
            return Err(KickError::invalid_param("sample_rate", "must be positive"));
        }
        if !(duration > 0.0) {
            return Err(KickError::invalid_param(
                "duration",
                format!("must be positive, got {duration}"),
            ));
        }

        Ok(Self {
            start_freq,
            end_freq,
            sample_rate,
            duration,
            bit_depth,
            waveform_type: WaveformType::Sine,
            attack: 0.005,
            decay: 0.3,
            sustain: 0.2,
            release: 0.3,
            drive: 0.2,
            filter_cutoff: 5000.0,
            filter_resonance: 0.2,
            sweep: 0.7,
            pitch_decay: 0.4,
            noise_type: NoiseType::None,
            noise_amount: 0.0,
            num_oscillators: 1,
            oscillator_levels: vec![1.0],
            saturator_amount: 0.3,
            filter_bands: DEFAULT_BANDS.to_vec(),
            fade_duration: 0.0,
            smooth_frequency_transitions: false,
        })
    }

    /// Random record in the neighbourhood the pad grid explores.
    ///
    /// Frequencies, sample rate, duration and bit depth come from `template`.
    pub fn random<R: Rng + ?Sized>(template: &Parameters, rng: &mut R) -> Self {
        let mut p = template.clone();
        p.attack = rng.gen::<f64>() * 0.02;
        p.decay = 0.2 + rng.gen::<f64>() * 0.8;
        p.sustain = rng.gen::<f64>() * 0.5;
        p.release = 0.2 + rng.gen::<f64>() * 0.5;
        p.drive = rng.gen::<f64>();
        p.filter_cutoff = 2000.0 + rng.gen::<f64>() * 6000.0;
        p.sweep = rng.gen::<f64>() * 1.5;
        p.pitch_decay = rng.gen::<f64>() * 1.5;
        p.fade_duration = rng.gen::<f64>() * 0.1;
        p.smooth_frequency_transitions = !rng.gen_bool(0.1);
        p.waveform_type = random_waveform(rng, 0.1);
        p
    }

    /// Check every invariant a render relies on.
    pub fn validate(&self) -> KickResult<()> {
        if self.sample_rate == 0 {
            return Err(KickError::invalid_param("sample_rate", "must be positive"));
        }
        if !(self.duration > 0.0) || !self.duration.is_finite() {
            return Err(KickError::invalid_param(
                "duration",
                format!("must be positive, got {}", self.duration),
            ));
        }
        if !SUPPORTED_BIT_DEPTHS.contains(&self.bit_depth) {
            return Err(KickError::invalid_param(
                "bit_depth",
                format!("must be 16 or 24, got {}", self.bit_depth),
            ));
        }
        for (name, freq) in [("start_freq", self.start_freq), ("end_freq", self.end_freq)] {
            if !(freq > 0.0) || !freq.is_finite() {
                return Err(KickError::invalid_param(
                    name,
                    format!("must be a positive frequency, got {freq}"),
                ));
            }
        }
        if self.num_oscillators == 0 {
            return Err(KickError::invalid_param(
                "num_oscillators",
                "at least one oscillator is required",
            ));
        }
        if self.oscillator_levels.len() != self.num_oscillators {
            return Err(KickError::invalid_param(
                "oscillator_levels",
                format!(
                    "expected {} levels, got {}",
                    self.num_oscillators,
                    self.oscillator_levels.len()
                ),
            ));
        }
        if self.filter_bands.len() != 3 {
            return Err(KickError::invalid_param(
                "filter_bands",
                format!("expected 3 band edges, got {}", self.filter_bands.len()),
            ));
        }
        if !self.filter_bands.windows(2).all(|w| w[0] < w[1]) {
            return Err(KickError::invalid_param(
                "filter_bands",
                format!("edges must be strictly ascending, got {:?}", self.filter_bands),
            ));
        }
        Ok(())
    }

    /// `floor(sample_rate * duration)`.
    pub fn num_samples(&self) -> usize {
        (self.sample_rate as f64 * self.duration) as usize
    }

    /// Replace the oscillator stack, keeping `num_oscillators` in step.
    pub fn set_oscillator_levels(&mut self, levels: Vec<f64>) {
        self.num_oscillators = levels.len();
        self.oscillator_levels = levels;
    }

    /// The eight continuous knobs the mutator perturbs, in a fixed order:
    /// attack, decay, sustain, release, drive, filter_cutoff, sweep, pitch_decay.
    pub fn knobs_mut(&mut self) -> [&mut f64; 8] {
        [
            &mut self.attack,
            &mut self.decay,
            &mut self.sustain,
            &mut self.release,
            &mut self.drive,
            &mut self.filter_cutoff,
            &mut self.sweep,
            &mut self.pitch_decay,
        ]
    }

    /// One-line description for pad listings and logs.
    pub fn summary(&self) -> String {
        format!(
            "Waveform={}, Attack={:.3}, Decay={:.3}, Sustain={:.3}, Release={:.3}, Drive={:.3}, FilterCutoff={:.3}, Sweep={:.3}, PitchDecay={:.3}",
            self.waveform_type.abbreviation(),
            self.attack,
            self.decay,
            self.sustain,
            self.release,
            self.drive,
            self.filter_cutoff,
            self.sweep,
            self.pitch_decay,
        )
    }
}

impl Default for Parameters {
    /// The driver's default kick: 150 Hz falling to 40 Hz, one second at
    /// 96 kHz / 16-bit with a short punchy envelope.
    fn default() -> Self {
        Self {
            start_freq: 150.0,
            end_freq: 40.0,
            sample_rate: 96_000,
            duration: 1.0,
            bit_depth: 16,
            waveform_type: WaveformType::Sine,
            attack: 0.003,
            decay: 0.3,
            sustain: 0.1,
            release: 0.15,
            drive: 0.1,
            filter_cutoff: 5000.0,
            filter_resonance: 0.2,
            sweep: 0.8,
            pitch_decay: 0.2,
            noise_type: NoiseType::None,
            noise_amount: 0.0,
            num_oscillators: 1,
            oscillator_levels: vec![1.0],
            saturator_amount: 0.3,
            filter_bands: DEFAULT_BANDS.to_vec(),
            fade_duration: 0.01,
            smooth_frequency_transitions: true,
        }
    }
}

/// Any of the seven waveforms with probability `wild`, otherwise Sine or Triangle.
pub(crate) fn random_waveform<R: Rng + ?Sized>(rng: &mut R, wild: f64) -> WaveformType {
    let pool: &[WaveformType] = if rng.gen_bool(wild) {
        &WaveformType::ALL
    } else {
        &WaveformType::ALL[..2]
    };
    pool[rng.gen_range(0..pool.len())]
}
