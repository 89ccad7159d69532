/*
One-Shot ADSR Envelope
======================

A kick has no gate: the note is "held" for the whole sample and released so
that the envelope reaches zero exactly at the end. The envelope is therefore
a pure function of time rather than a state machine.

  Level
    1.0 ┐  ╱╲
        │ ╱  ╲
    S   │╱    ╲______________
        │                    ╲
    0.0 └─────────────────────╲──→ t
        0  A  A+D          D-R  D

  t < A           t / A
  t < A + D       1 - ((t - A) / D) (1 - S)
  t < D - R       S
  t < D           S (1 - (t - (D - R)) / R)
  otherwise       0

D is the sample duration. When A + D + R exceeds D the later stages simply
never happen; this is not an error. Zero-length stages are skipped by the
strict comparisons, so no division by zero can occur.
*/

/// Linear ADSR shape spanning the whole sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub attack: f64,
    pub decay: f64,
    pub sustain: f64,
    pub release: f64,
    pub duration: f64,
}

impl Envelope {
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64, duration: f64) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
            duration,
        }
    }

    /// Envelope level at time `t` seconds.
    #[inline]
    pub fn level_at(&self, t: f64) -> f64 {
        let Self {
            attack,
            decay,
            sustain,
            release,
            duration,
        } = *self;

        if t < attack {
            return t / attack;
        }
        if t < attack + decay {
            return 1.0 - ((t - attack) / decay) * (1.0 - sustain);
        }
        if t < duration - release {
            return sustain;
        }
        if t < duration {
            return sustain * (1.0 - (t - (duration - release)) / release);
        }
        0.0
    }

    /// Render the envelope at `sample_rate` into `buffer`.
    pub fn render(&self, buffer: &mut [f64], sample_rate: u32) {
        let sr = sample_rate as f64;
        for (i, level) in buffer.iter_mut().enumerate() {
            *level = self.level_at(i as f64 / sr);
        }
    }
}
