use rand::Rng;

use crate::dsp::distortion::{drive, saturate_buffer};
use crate::dsp::filter::attenuate_bands;
use crate::dsp::mix::{apply_fade, mix_noise};
use crate::dsp::oscillator::oscillate;
use crate::dsp::pitch::pitch_modulation;
use crate::dsp::{Envelope, NoiseState, PitchSweep};
use crate::error::KickResult;
use crate::params::Parameters;

/*
Kick Engine
===========

One render is a single pass over the N = floor(sample_rate * duration)
samples, followed by four whole-buffer passes:

    for each sample i (t = i / sample_rate):
        f     = pitch law at t                (pitch_mod tabulated up front)
        env   = ADSR level at t
        total = Σ_k drive(osc(f, t)) * env * level[k]
        buf[i] = trunc(total * (2^bit_depth - 1))

    saturate(buf)           tanh, normalised to 2^15
    attenuate_bands(buf)    time-keyed 0.9 / 0.8 / 0.7 / 0.6 gains
    mix_noise(buf)          only when a noise layer is selected, clamps ±32767
    apply_fade(buf)         only when fade_duration > 0

The mix scale is 2^bit_depth - 1, not 2^(bit_depth - 1) - 1: a full-scale
16-bit sine enters the saturator at twice full scale and comes out as a
rounded, compressed wave. The noise layer uses 2^(bit_depth - 1). Both scales
are part of the sound.

A fresh `NoiseState` is created for every render, so the buffer depends only
on the parameters and the generator.
*/

/// Render `params` to an integer PCM buffer.
///
/// The buffer is exactly what the WAV sink writes.
pub fn render<R: Rng + ?Sized>(params: &Parameters, rng: &mut R) -> KickResult<Vec<i32>> {
    params.validate()?;

    let mut noise = NoiseState::new();
    let mut samples = oscillator_stack(params, &mut noise, rng);

    saturate_buffer(&mut samples, params.saturator_amount);
    attenuate_bands(&mut samples, &params.filter_bands, params.sample_rate);

    if let Some(color) = params.noise_type.color() {
        mix_noise(
            &mut samples,
            color,
            params.noise_amount,
            params.bit_depth,
            &mut noise,
            rng,
        );
    }

    if params.fade_duration > 0.0 {
        apply_fade(&mut samples, params.sample_rate, params.fade_duration);
    }

    tracing::debug!(
        samples = samples.len(),
        sample_rate = params.sample_rate,
        bit_depth = params.bit_depth,
        waveform = params.waveform_type.abbreviation(),
        "rendered kick"
    );

    Ok(samples)
}

/// Oscillators, drive, envelope and level, quantised to the mix scale.
fn oscillator_stack<R: Rng + ?Sized>(
    params: &Parameters,
    noise: &mut NoiseState,
    rng: &mut R,
) -> Vec<i32> {
    let num_samples = params.num_samples();
    let sr = params.sample_rate as f64;
    let scale = ((1i64 << params.bit_depth) - 1) as f64;

    let pitch_mod = pitch_modulation(params.sample_rate, num_samples);
    let sweep = PitchSweep::new(
        params.start_freq,
        params.end_freq,
        params.duration,
        params.sweep,
        params.smooth_frequency_transitions,
    );
    let envelope = Envelope::new(
        params.attack,
        params.decay,
        params.sustain,
        params.release,
        params.duration,
    );

    let mut samples = Vec::with_capacity(num_samples);
    for (i, &bump) in pitch_mod.iter().enumerate() {
        let t = i as f64 / sr;
        let freq = sweep.frequency_at(t, bump);
        let level = envelope.level_at(t);

        let mut total = 0.0;
        for &gain in &params.oscillator_levels {
            let raw = oscillate(params.waveform_type, freq, t, i, noise, rng);
            total += drive(raw, params.drive) * level * gain;
        }

        samples.push((total * scale) as i32);
    }
    samples
}
