/*
Multi-Band Attenuator
=====================

Despite the name this is not a spectral filter. Each sample's time `t` is
mapped onto an exponential "frequency proxy"

    freq_proxy(t) = 440 * 2^t

and that proxy picks a gain from the three ascending band edges:

| freq_proxy        | gain |
| ----------------- | ---- |
| < bands[0]        | 0.9  |
| < bands[1]        | 0.8  |
| < bands[2]        | 0.7  |
| otherwise         | 0.6  |

So the whole kick is attenuated by a staircase that can only step down over
time. With the default edges (200, 1000, 3000) the proxy starts at 440 Hz,
crosses 1000 Hz at t ≈ 1.18 s and 3000 Hz at t ≈ 2.77 s: a one second kick is
scaled by 0.8 throughout.

`filter_cutoff` and `filter_resonance` on the parameter record do not reach
this stage.
*/

/// Gains applied below each band edge, and above the last one.
pub const BAND_GAINS: [f64; 4] = [0.9, 0.8, 0.7, 0.6];

/// Default band edges in Hz.
pub const DEFAULT_BANDS: [f64; 3] = [200.0, 1000.0, 3000.0];

/// Frequency proxy for time `t`.
#[inline]
pub fn frequency_proxy(t: f64) -> f64 {
    440.0 * 2.0f64.powf(t)
}

/// Gain for a given proxy frequency and three ascending band edges.
#[inline]
pub fn band_gain(freq_proxy: f64, bands: &[f64]) -> f64 {
    bands
        .iter()
        .position(|&edge| freq_proxy < edge)
        .map_or(BAND_GAINS[3], |band| BAND_GAINS[band])
}

/// Apply the time-keyed band gains to an integer buffer in place.
///
/// `bands` must hold three ascending edges; parameter validation enforces it.
pub fn attenuate_bands(buffer: &mut [i32], bands: &[f64], sample_rate: u32) {
    let sr = sample_rate as f64;
    for (i, sample) in buffer.iter_mut().enumerate() {
        let gain = band_gain(frequency_proxy(i as f64 / sr), bands);
        *sample = (*sample as f64 * gain) as i32;
    }
}
