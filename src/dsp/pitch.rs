//! Pitch law for the kick body.

/*
Pitch Sweep
===========

The body of a kick starts high and falls towards its fundamental. Two laws
are available.

Smooth (exponential sweep with a short bump):

    decay_factor(t) = (end / start) ^ ((t / D) * sweep)
    pitch_mod(t)    = 1 + 0.1 * exp(-3 t)
    f(t)            = start * decay_factor(t) * pitch_mod(t)

  With sweep = 1 the frequency reaches `end` exactly at t = D (ignoring the
  bump). Smaller sweeps stop short of it, larger ones overshoot below it.
  `pitch_mod` adds ~10% extra pitch at the very start that fades over the
  first second, giving the attack a little more click.

Abrupt (step):

    f(t) = start   for t < D / 2
           end     otherwise

  `pitch_mod` is not applied in this mode.

`pitch_mod` depends only on time, so it is tabulated once per render.
*/

/// Per-sample frequency source for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchSweep {
    pub start_freq: f64,
    pub end_freq: f64,
    pub duration: f64,
    pub sweep: f64,
    pub smooth: bool,
}

impl PitchSweep {
    pub fn new(start_freq: f64, end_freq: f64, duration: f64, sweep: f64, smooth: bool) -> Self {
        Self {
            start_freq,
            end_freq,
            duration,
            sweep,
            smooth,
        }
    }

    /// Exponential interpolation factor from `start_freq` towards `end_freq`.
    #[inline]
    pub fn decay_factor(&self, t: f64) -> f64 {
        (self.end_freq / self.start_freq).powf((t / self.duration) * self.sweep)
    }

    /// Instantaneous frequency at `t`, given the tabulated bump for that sample.
    #[inline]
    pub fn frequency_at(&self, t: f64, pitch_mod: f64) -> f64 {
        if self.smooth {
            self.start_freq * self.decay_factor(t) * pitch_mod
        } else if t < self.duration / 2.0 {
            self.start_freq
        } else {
            self.end_freq
        }
    }
}

/// The pitch bump at time `t`: `1 + 0.1 e^(-3t)`.
#[inline]
pub fn pitch_mod_at(t: f64) -> f64 {
    1.0 + 0.1 * (-3.0 * t).exp()
}

/// Tabulate `pitch_mod` for `num_samples` samples.
pub fn pitch_modulation(sample_rate: u32, num_samples: usize) -> Vec<f64> {
    let sr = sample_rate as f64;
    (0..num_samples)
        .map(|i| pitch_mod_at(i as f64 / sr))
        .collect()
}
