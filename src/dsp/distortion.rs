//! Drive and Saturation
//!
//! Two nonlinear stages shape the kick. Drive runs on each raw oscillator
//! sample before the envelope; saturation runs on the quantized buffer.
//!
//! # Drive (soft clip)
//!
//!   f(x) = x (1 + d) / (1 + d |x|)
//!
//! - d = 0 is a bypass
//! - f(±1) = ±1 for every d, so full-scale peaks stay put
//! - small signals get a gain of (1 + d), rounding the waveform off
//!
//! # Saturator (tanh)
//!
//!   y = tanh(x (1 + amount))      where x = sample / 2^15
//!
//! The buffer is normalised to 16-bit full scale regardless of the bit depth
//! being rendered, then rescaled by 2^15. Because the mix stage quantises to
//! 2^bit_depth - 1, a 16-bit render enters the saturator at roughly twice
//! full scale and a 24-bit render is pushed hard into the flat part of tanh.
//! Every render leaves the saturator inside ±2^15.

/// Soft clip one sample with drive `drive`. `drive <= 0` leaves it unchanged.
#[inline]
pub fn drive(sample: f64, drive: f64) -> f64 {
    if drive > 0.0 {
        sample * (1.0 + drive) / (1.0 + drive * sample.abs())
    } else {
        sample
    }
}

/// 16-bit full scale used by the saturator.
const SATURATOR_SCALE: f64 = (1 << 15) as f64;

/// tanh saturation of one integer sample.
#[inline]
pub fn saturate(sample: i32, amount: f64) -> i32 {
    let x = sample as f64 / SATURATOR_SCALE;
    ((x * (1.0 + amount)).tanh() * SATURATOR_SCALE) as i32
}

/// Apply tanh saturation to an entire buffer in place.
pub fn saturate_buffer(buffer: &mut [i32], amount: f64) {
    for sample in buffer.iter_mut() {
        *sample = saturate(*sample, amount);
    }
}
