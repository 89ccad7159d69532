/*
Uniform Mutation
================

Every continuous knob moves by a random fraction of its own value:

    v' = v + (u - 0.5) * m * v        u ~ U[0, 1)

so a knob can move by up to m/2 of itself in either direction. A knob at
zero stays at zero, and sign never flips for m < 2.

The same mutator serves three callers, each with its own factor:

    pad fan-out     m = 0.4    siblings of the selected pad
    mutate-all      m = 0.2    every pad nudged in place
    search step     m = 0.1    one optimizer generation

The waveform is redrawn on every mutation: with probability `wild` from all
seven waveforms, otherwise from {Sine, Triangle}.
*/

use rand::Rng;

use crate::params::{random_waveform, Parameters};

/// Factor used when fanning all pads out from a selected one.
pub const PAD_FAN_OUT: f64 = 0.4;
/// Factor used when nudging every pad in place.
pub const MUTATE_ALL: f64 = 0.2;
/// Factor used for each optimizer generation.
pub const SEARCH_STEP: f64 = 0.1;
/// Probability of drawing from the full waveform set.
pub const WILD_WAVEFORM: f64 = 0.1;

/// Parameterised uniform mutator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mutator {
    factor: f64,
    wild_waveform: f64,
}

impl Mutator {
    pub fn new(factor: f64) -> Self {
        Self {
            factor,
            wild_waveform: WILD_WAVEFORM,
        }
    }

    /// Override the probability of a wild waveform draw. Clamped to [0, 1].
    pub fn with_wild_waveform(mut self, probability: f64) -> Self {
        self.wild_waveform = probability.clamp(0.0, 1.0);
        self
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Mutate one record in place.
    pub fn mutate<R: Rng + ?Sized>(&self, params: &mut Parameters, rng: &mut R) {
        for knob in params.knobs_mut() {
            *knob += (rng.gen::<f64>() - 0.5) * self.factor * *knob;
        }
        params.waveform_type = random_waveform(rng, self.wild_waveform);
    }

    /// Mutate every record in place.
    pub fn mutate_all<R: Rng + ?Sized>(&self, population: &mut [Parameters], rng: &mut R) {
        for params in population {
            self.mutate(params, rng);
        }
    }

    /// `count` independently mutated copies of `base`. `base` is untouched.
    pub fn fan_out<R: Rng + ?Sized>(
        &self,
        base: &Parameters,
        count: usize,
        rng: &mut R,
    ) -> Vec<Parameters> {
        (0..count)
            .map(|_| {
                let mut sibling = base.clone();
                self.mutate(&mut sibling, rng);
                sibling
            })
            .collect()
    }
}

impl Default for Mutator {
    fn default() -> Self {
        Self::new(SEARCH_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::WaveformType;
    use crate::rng::create_rng;

    fn knobs(p: &Parameters) -> [f64; 8] {
        [
            p.attack,
            p.decay,
            p.sustain,
            p.release,
            p.drive,
            p.filter_cutoff,
            p.sweep,
            p.pitch_decay,
        ]
    }

    #[test]
    fn knobs_stay_within_half_factor() {
        let base = Parameters::default();
        let mut rng = create_rng(3);
        let mutator = Mutator::new(PAD_FAN_OUT);

        for sibling in mutator.fan_out(&base, 200, &mut rng) {
            for (before, after) in knobs(&base).iter().zip(knobs(&sibling)) {
                let limit = before.abs() * PAD_FAN_OUT / 2.0 + 1e-12;
                assert!((after - before).abs() <= limit, "{before} -> {after}");
            }
        }
    }

    #[test]
    fn zero_knob_stays_zero() {
        let mut p = Parameters::default();
        p.drive = 0.0;
        Mutator::new(MUTATE_ALL).mutate(&mut p, &mut create_rng(1));
        assert_eq!(p.drive, 0.0);
    }

    #[test]
    fn fan_out_leaves_base_alone() {
        let base = Parameters::default();
        let snapshot = base.clone();
        let siblings = Mutator::new(PAD_FAN_OUT).fan_out(&base, 16, &mut create_rng(8));
        assert_eq!(siblings.len(), 16);
        assert_eq!(base, snapshot);
        assert!(siblings.iter().any(|s| s.decay != base.decay));
    }

    #[test]
    fn tame_waveforms_without_wild_draws() {
        let mutator = Mutator::new(SEARCH_STEP).with_wild_waveform(0.0);
        let mut rng = create_rng(5);
        let mut p = Parameters::default();
        for _ in 0..200 {
            mutator.mutate(&mut p, &mut rng);
            assert!(matches!(
                p.waveform_type,
                WaveformType::Sine | WaveformType::Triangle
            ));
        }
    }

    #[test]
    fn fields_outside_the_knobs_are_kept() {
        let mut p = Parameters::default();
        p.noise_amount = 0.7;
        Mutator::new(1.0).mutate(&mut p, &mut create_rng(2));
        assert_eq!(p.noise_amount, 0.7);
        assert_eq!(p.start_freq, 150.0);
        assert_eq!(p.filter_bands, vec![200.0, 1000.0, 3000.0]);
    }
}
