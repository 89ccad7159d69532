//! Noise layering and fade windowing on the integer buffer.

use rand::Rng;

use super::noise::{NoiseColor, NoiseState};

/*
Noise Layer
===========

The noise layer is ADDED to the finished integer buffer:

    sample += trunc(noise * amount * 2^(bit_depth - 1))
    sample  = clamp(sample, -32767, 32767)

Vocabulary
----------

  amount      Layer level, 0.0 (off) to 1.0 (full scale noise).

  clamp       The clamp is fixed at 16-bit full scale (±32767) whatever the
              bit depth. A 24-bit render with noise is therefore squeezed
              into the 16-bit range, and the layer itself is scaled to 2^23.
              Renders without noise are never clamped here.


Fade Window
===========

A linear fade-in over the first k samples and a symmetric fade-out over the
last k samples, with

    k = min(trunc(fade_duration * sample_rate), N / 2)

  Gain
    1.0 ┐    ╱‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾╲
        │   ╱                  ╲
    0.0 └──╱────────────────────╲──→ i
           0   k           N-k   N

Fade-in gain is i / k, so the first sample is exactly zero. Fade-out gain is
(N - i) / k, reaching 1/k on the last sample. k = 0 leaves the buffer alone.
*/

/// Legacy clamp applied after noise mixing.
pub const NOISE_CLAMP: i32 = 32_767;

/// Add a noise layer to `buffer` and clamp to ±32767.
pub fn mix_noise<R: Rng + ?Sized>(
    buffer: &mut [i32],
    color: NoiseColor,
    amount: f64,
    bit_depth: u16,
    state: &mut NoiseState,
    rng: &mut R,
) {
    let scale = (1i64 << (bit_depth - 1)) as f64;
    for (i, sample) in buffer.iter_mut().enumerate() {
        let noise = state.next(color, i, rng);
        let layered = *sample as i64 + (noise * amount * scale) as i64;
        *sample = layered.clamp(-(NOISE_CLAMP as i64), NOISE_CLAMP as i64) as i32;
    }
}

/// Number of samples in each fade ramp.
pub fn fade_length(num_samples: usize, sample_rate: u32, fade_duration: f64) -> usize {
    let requested = (fade_duration * sample_rate as f64) as usize;
    requested.min(num_samples / 2)
}

/// Apply linear fade-in and fade-out ramps of `fade_duration` seconds.
pub fn apply_fade(buffer: &mut [i32], sample_rate: u32, fade_duration: f64) {
    let len = buffer.len();
    let k = fade_length(len, sample_rate, fade_duration);
    if k == 0 {
        return;
    }

    let ramp = k as f64;
    for (i, sample) in buffer[..k].iter_mut().enumerate() {
        *sample = (*sample as f64 * (i as f64 / ramp)) as i32;
    }
    for i in len - k..len {
        let gain = (len - i) as f64 / ramp;
        buffer[i] = (buffer[i] as f64 * gain) as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn fade_length_is_capped_at_half() {
        assert_eq!(fade_length(1000, 1000, 0.01), 10);
        assert_eq!(fade_length(1000, 1000, 5.0), 500);
        assert_eq!(fade_length(1000, 1000, 0.0), 0);
    }

    #[test]
    fn fade_ramps_both_ends() {
        let mut buf = vec![1000; 100];
        apply_fade(&mut buf, 1000, 0.01);

        assert_eq!(buf[0], 0);
        assert_eq!(buf[5], 500);
        assert_eq!(buf[10], 1000);
        assert_eq!(buf[89], 1000);
        assert_eq!(buf[90], 1000); // (100 - 90) / 10
        assert_eq!(buf[95], 500);
        assert_eq!(buf[99], 100);
    }

    #[test]
    fn zero_fade_is_identity() {
        let original: Vec<i32> = (0..64).map(|i| i * 37 - 900).collect();
        let mut buf = original.clone();
        apply_fade(&mut buf, 48_000, 0.0);
        assert_eq!(buf, original);
    }

    #[test]
    fn noise_mix_clamps_to_sixteen_bit() {
        let mut buf = vec![32_000; 2048];
        let mut state = NoiseState::new();
        let mut rng = create_rng(17);
        mix_noise(&mut buf, NoiseColor::White, 1.0, 24, &mut state, &mut rng);

        assert!(buf.iter().all(|s| s.abs() <= NOISE_CLAMP));
        assert!(buf.iter().any(|&s| s == NOISE_CLAMP));
        assert!(buf.iter().any(|&s| s == -NOISE_CLAMP));
    }

    #[test]
    fn zero_amount_leaves_buffer_untouched() {
        let original: Vec<i32> = (0..256).map(|i| (i * 101) % 30_000 - 15_000).collect();
        let mut buf = original.clone();
        let mut state = NoiseState::new();
        let mut rng = create_rng(2);
        mix_noise(&mut buf, NoiseColor::Brown, 0.0, 16, &mut state, &mut rng);
        assert_eq!(buf, original);
    }
}
