#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::Rng;

use crate::rng::bipolar;

/*
Noise Sources
=============

Three flavours of noise, used either as an oscillator waveform or as a layer
mixed on top of the finished kick.

  white   Independent uniform draws in [-1, 1]. Flat spectrum, pure hiss.

  pink    A running sum of white draws divided by the sample index:

              acc += u(-1, 1)
              out  = acc / (i + 1)

          This is NOT a 1/f filter. It starts loud and shrinks towards zero
          as the index grows, which gives a short noisy transient at the
          front of the kick. Kept as-is because presets were voiced with it.

  brown   A clamped random walk with step 0.1:

              acc = clamp(acc + 0.1 * u(-1, 1), -1, 1)
              out = acc

          Low-frequency rumble, never leaves [-1, 1].


Render-local state
------------------

Pink and brown each carry one accumulator. Both live in `NoiseState`, which
is constructed fresh at the start of every render and threaded through the
oscillator stack and the noise mix. Two renders never share accumulators,
so output depends only on the parameters and the generator seed.
*/

/// Noise layer mixed over the rendered kick.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseType {
    #[default]
    None,
    White,
    Pink,
    Brown,
}

/// Concrete noise colour, shared by noise waveforms and the noise layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseColor {
    White,
    Pink,
    Brown,
}

impl NoiseType {
    /// Colour to mix, or `None` when the layer is disabled.
    pub fn color(self) -> Option<NoiseColor> {
        match self {
            NoiseType::None => None,
            NoiseType::White => Some(NoiseColor::White),
            NoiseType::Pink => Some(NoiseColor::Pink),
            NoiseType::Brown => Some(NoiseColor::Brown),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NoiseType::None => "none",
            NoiseType::White => "white",
            NoiseType::Pink => "pink",
            NoiseType::Brown => "brown",
        }
    }
}

impl std::str::FromStr for NoiseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(NoiseType::None),
            "white" => Ok(NoiseType::White),
            "pink" => Ok(NoiseType::Pink),
            "brown" => Ok(NoiseType::Brown),
            other => Err(format!(
                "invalid noise type '{other}', choose from: none, white, pink, brown"
            )),
        }
    }
}

/// Accumulators for the stateful noise colours. One per render.
#[derive(Debug, Clone, Default)]
pub struct NoiseState {
    pink: f64,
    brown: f64,
}

impl NoiseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero both accumulators.
    pub fn reset(&mut self) {
        self.pink = 0.0;
        self.brown = 0.0;
    }

    #[inline]
    pub fn white<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        bipolar(rng)
    }

    /// Divisive running-sum noise for sample `index`.
    #[inline]
    pub fn pink<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> f64 {
        self.pink += bipolar(rng);
        self.pink / (index + 1) as f64
    }

    /// Clamped random walk.
    #[inline]
    pub fn brown<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        self.brown = (self.brown + 0.1 * bipolar(rng)).clamp(-1.0, 1.0);
        self.brown
    }

    /// Draw one sample of `color` at sample `index`.
    #[inline]
    pub fn next<R: Rng + ?Sized>(&mut self, color: NoiseColor, index: usize, rng: &mut R) -> f64 {
        match color {
            NoiseColor::White => self.white(rng),
            NoiseColor::Pink => self.pink(index, rng),
            NoiseColor::Brown => self.brown(rng),
        }
    }
}
