#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f64::consts::TAU;

use rand::Rng;

use super::noise::{NoiseColor, NoiseState};

/*
Kick Oscillators
================

Every oscillator here is evaluated directly from absolute time `t` and the
instantaneous frequency `f(t)`. There is no phase accumulator: the kick is a
single offline shot, so `phase = t * f(t)` is all we need and makes each
sample independent of the previous one.

  Sine       sin(2π f t)
  Triangle   2 |2 (t f - ⌊t f + 0.5⌋)| - 1
  Sawtooth   2 (t f - ⌊0.5 + t f⌋)
  Square     sign(sin(2π f t))          (sign(+0) = +1, sign(-0) = -1)

Because `f` itself sweeps with time, `t * f(t)` is not the integral of the
frequency. The result is a sweep that overshoots its nominal pitch slightly;
presets were tuned against this behaviour, so it stays.

Noise waveforms ignore `f(t)` and delegate to the render's `NoiseState`.
*/

/// Oscillator waveform of the kick body.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaveformType {
    #[default]
    Sine,
    Triangle,
    Sawtooth,
    Square,
    NoiseWhite,
    NoisePink,
    NoiseBrown,
}

impl WaveformType {
    /// All waveforms in selector order (0..=6).
    pub const ALL: [WaveformType; 7] = [
        WaveformType::Sine,
        WaveformType::Triangle,
        WaveformType::Sawtooth,
        WaveformType::Square,
        WaveformType::NoiseWhite,
        WaveformType::NoisePink,
        WaveformType::NoiseBrown,
    ];

    /// Numeric selector used by drivers and the fingerprint encoding.
    pub fn index(self) -> u8 {
        match self {
            WaveformType::Sine => 0,
            WaveformType::Triangle => 1,
            WaveformType::Sawtooth => 2,
            WaveformType::Square => 3,
            WaveformType::NoiseWhite => 4,
            WaveformType::NoisePink => 5,
            WaveformType::NoiseBrown => 6,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Three-letter tag for pad listings.
    pub fn abbreviation(self) -> &'static str {
        match self {
            WaveformType::Sine => "sin",
            WaveformType::Triangle => "tri",
            WaveformType::Sawtooth => "saw",
            WaveformType::Square => "sqr",
            WaveformType::NoiseWhite => "nwh",
            WaveformType::NoisePink => "npk",
            WaveformType::NoiseBrown => "nbr",
        }
    }

    /// Noise colour if this waveform is a noise source.
    pub fn noise_color(self) -> Option<NoiseColor> {
        match self {
            WaveformType::NoiseWhite => Some(NoiseColor::White),
            WaveformType::NoisePink => Some(NoiseColor::Pink),
            WaveformType::NoiseBrown => Some(NoiseColor::Brown),
            _ => None,
        }
    }
}

impl std::str::FromStr for WaveformType {
    type Err = String;

    /// Accepts the selector index, the abbreviation or the plain name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if let Ok(index) = wanted.parse::<u8>() {
            return Self::from_index(index)
                .ok_or_else(|| format!("invalid waveform index {index}, expected 0-6"));
        }
        let by_name = match wanted.as_str() {
            "sine" => Some(WaveformType::Sine),
            "triangle" => Some(WaveformType::Triangle),
            "sawtooth" => Some(WaveformType::Sawtooth),
            "square" => Some(WaveformType::Square),
            "white" => Some(WaveformType::NoiseWhite),
            "pink" => Some(WaveformType::NoisePink),
            "brown" => Some(WaveformType::NoiseBrown),
            _ => None,
        };
        by_name
            .or_else(|| Self::ALL.into_iter().find(|w| w.abbreviation() == wanted))
            .ok_or_else(|| {
                format!("invalid waveform '{s}', choose from: sin, tri, saw, sqr, nwh, npk, nbr")
            })
    }
}

#[inline]
pub fn sine(freq: f64, t: f64) -> f64 {
    (TAU * freq * t).sin()
}

#[inline]
pub fn triangle(freq: f64, t: f64) -> f64 {
    let phase = t * freq;
    2.0 * (2.0 * (phase - (phase + 0.5).floor())).abs() - 1.0
}

#[inline]
pub fn sawtooth(freq: f64, t: f64) -> f64 {
    let phase = t * freq;
    2.0 * (phase - (0.5 + phase).floor())
}

#[inline]
pub fn square(freq: f64, t: f64) -> f64 {
    1.0f64.copysign(sine(freq, t))
}

/// One raw oscillator sample in [-1, 1].
///
/// `index` is the sample position, needed by the pink noise divisor.
#[inline]
pub fn oscillate<R: Rng + ?Sized>(
    waveform: WaveformType,
    freq: f64,
    t: f64,
    index: usize,
    noise: &mut NoiseState,
    rng: &mut R,
) -> f64 {
    match waveform {
        WaveformType::Sine => sine(freq, t),
        WaveformType::Triangle => triangle(freq, t),
        WaveformType::Sawtooth => sawtooth(freq, t),
        WaveformType::Square => square(freq, t),
        WaveformType::NoiseWhite => noise.next(NoiseColor::White, index, rng),
        WaveformType::NoisePink => noise.next(NoiseColor::Pink, index, rng),
        WaveformType::NoiseBrown => noise.next(NoiseColor::Brown, index, rng),
    }
}
